//! # Rendering Module
//!
//! Turns command results into terminal text. Layout math (widths,
//! truncation, padding) is Unicode-aware; styling is applied only when the
//! output is a terminal, so piped output stays plain.

use colored::{ColoredString, Colorize};
use std::io::IsTerminal;
use stockroom::api::{CmdMessage, MessageLevel};
use stockroom::index::DisplayProduct;
use stockroom::model::{Stats, StockStatus};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const NAME_WIDTH: usize = 40;
const INDEX_WIDTH: usize = 5;
const QTY_WIDTH: usize = 8;

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

fn paint(text: &str, use_color: bool, style: fn(&str) -> ColoredString) -> String {
    if use_color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn render_product_table(products: &[DisplayProduct]) -> String {
    render_product_table_internal(products, use_color())
}

fn render_product_table_internal(products: &[DisplayProduct], use_color: bool) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let mut out = String::new();
    let header = format!(
        "{:>iw$}  {}  {:>qw$}  {}",
        "#",
        pad_to_width("Name", NAME_WIDTH),
        "Qty",
        "Status",
        iw = INDEX_WIDTH,
        qw = QTY_WIDTH
    );
    out.push_str(&paint(&header, use_color, |s| s.bold()));
    out.push('\n');

    for dp in products {
        let name = pad_to_width(&truncate_to_width(&dp.product.name, NAME_WIDTH), NAME_WIDTH);
        let status = match dp.status {
            StockStatus::OutOfStock => paint(dp.status.label(), use_color, |s| s.red()),
            StockStatus::Low => paint(dp.status.label(), use_color, |s| s.yellow()),
            StockStatus::Normal => paint(dp.status.label(), use_color, |s| s.green()),
        };
        let index = format!("{:>w$}.", dp.index, w = INDEX_WIDTH - 1);
        out.push_str(&format!(
            "{}  {}  {:>qw$}  {}\n",
            paint(&index, use_color, |s| s.dimmed()),
            name,
            dp.product.quantity,
            status,
            qw = QTY_WIDTH
        ));
    }
    out
}

pub fn render_stats(stats: &Stats) -> String {
    render_stats_internal(stats, use_color())
}

fn render_stats_internal(stats: &Stats, use_color: bool) -> String {
    let low = format!("Low stock: {}", stats.low_or_empty);
    let empty = format!("Out of stock: {}", stats.out_of_stock);
    format!(
        "Total: {}  {}  {}\n",
        stats.total,
        paint(&low, use_color && stats.low_or_empty > 0, |s| s.yellow()),
        paint(&empty, use_color && stats.out_of_stock > 0, |s| s.red()),
    )
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, use_color())
}

fn render_messages_internal(messages: &[CmdMessage], use_color: bool) -> String {
    messages
        .iter()
        .map(|m| {
            let line = match m.level {
                MessageLevel::Info => paint(&m.content, use_color, |s| s.dimmed()),
                MessageLevel::Success => paint(&m.content, use_color, |s| s.green()),
                MessageLevel::Warning => paint(&m.content, use_color, |s| s.yellow()),
                MessageLevel::Error => paint(&m.content, use_color, |s| s.red()),
            };
            format!("{}\n", line)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub fn eprint_messages(messages: &[CmdMessage]) {
    eprint!(
        "{}",
        render_messages_internal(messages, std::io::stderr().is_terminal())
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
