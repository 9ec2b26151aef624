use colored::Colorize;
use poolpass::api::{CmdMessage, MessageLevel, PoolRow};
use poolpass::config::PassportConfig;
use poolpass::date::format_for_display;
use poolpass::model::VisitedRecord;
use poolpass::views::{Page, Stamp, Summary};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const DATE_WIDTH: usize = 10;
const SELECTED_MARKER: &str = "▸";
const VISITED_MARKER: &str = "✓";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub fn print_summary(summary: &Summary) {
    println!(
        "Visited {} of {} pools",
        summary.visited_count.to_string().bold(),
        summary.total
    );
}

fn stamp_date(record: &VisitedRecord) -> String {
    record
        .date
        .as_deref()
        .map(format_for_display)
        .unwrap_or_else(|| "undated".to_string())
}

pub fn print_detail(row: &PoolRow) {
    let pool = &row.pool;
    println!("{} {}", format!("{}.", row.number).yellow(), pool.name.bold());

    let place: Vec<&str> = [pool.suburb.as_str(), pool.area.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !place.is_empty() {
        println!("   {}", place.join(", "));
    }
    if !pool.location.is_empty() {
        println!("   {}", pool.location.dimmed());
    }
    println!("   {}", format!("{:.4}, {:.4}", pool.lat, pool.lng).dimmed());

    match &row.record {
        Some(record) => println!(
            "   {} {}",
            VISITED_MARKER.green(),
            format!("Stamped {}", stamp_date(record)).green()
        ),
        None => println!("   {}", "Not visited yet".dimmed()),
    }
}

pub fn print_pools(rows: &[PoolRow]) {
    if rows.is_empty() {
        println!("No pools found.");
        return;
    }

    let number_width = rows
        .iter()
        .map(|r| r.number.to_string().len())
        .max()
        .unwrap_or(1);

    for row in rows {
        let marker = if row.selected { SELECTED_MARKER } else { " " };
        let check = if row.record.is_some() {
            VISITED_MARKER.green()
        } else {
            " ".normal()
        };
        let number = format!("{:>width$}.", row.number, width = number_width);

        let label = if row.pool.suburb.is_empty() {
            row.pool.name.clone()
        } else {
            format!("{} ({})", row.pool.name, row.pool.suburb)
        };

        // marker, space, number, space, check, space ... space, date
        let fixed_width = marker.width() + number.width() + VISITED_MARKER.width() + DATE_WIDTH + 4;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let label = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label.width());

        let date = row.record.as_ref().map(stamp_date).unwrap_or_default();

        println!(
            "{} {} {} {}{} {}",
            marker.yellow(),
            number,
            check,
            if row.selected {
                label.bold()
            } else {
                label.normal()
            },
            " ".repeat(padding),
            format!("{:>width$}", date, width = DATE_WIDTH).dimmed()
        );
    }
}

pub fn print_passport(page: &Page<Stamp>) {
    println!(
        "{}",
        format!("Passport, page {} of {}", page.clamped_index + 1, page.total_pages).bold()
    );

    if page.items.is_empty() {
        println!("   {}", "No stamps yet. Visit a pool and run `poolpass toggle`.".dimmed());
        return;
    }

    for stamp in &page.items {
        let date = format!("{:>width$}", stamp_date(&stamp.record), width = DATE_WIDTH);
        let suburb = if stamp.pool.suburb.is_empty() {
            String::new()
        } else {
            format!(" ({})", stamp.pool.suburb)
        };
        println!(
            "   {}  {}{}",
            date.yellow(),
            stamp.pool.name,
            suburb.dimmed()
        );
    }
}

pub fn print_config(config: &PassportConfig) {
    for key in PassportConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
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
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
