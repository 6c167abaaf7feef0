use comfy_table::{Attribute, Cell, Color, Row, Table};
use sked_core::registry::Registry;
use sked_core::schedule::{Order, Schedule};
use sked_core::task::{DATE_FORMAT, TIME_FORMAT};

pub fn schedule_table(schedule: &Schedule) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "ID", "Date", "Time", "Task"]);

    for (position, task) in schedule.iter().enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new(position + 1));
        row.add_cell(Cell::new(task.id()).fg(Color::Yellow));
        row.add_cell(Cell::new(task.date().format(DATE_FORMAT)));
        row.add_cell(Cell::new(task.time().format(TIME_FORMAT)));
        row.add_cell(Cell::new(task.description()));
        table.add_row(row);
    }

    table
}

pub fn display_schedule(schedule: &Schedule) {
    let suffix = match schedule.order() {
        Order::Ascending => "",
        Order::Descending => " (reversed)",
    };
    let title = Cell::new(format!("Schedule: {}{suffix}", schedule.name()))
        .add_attribute(Attribute::Bold);
    let mut heading = Table::new();
    heading.add_row(vec![title]);

    println!("\n{heading}");
    println!("{}", schedule_table(schedule));
    println!("Total: {} task(s)", schedule.len());
}

pub fn display_registry(registry: &Registry) {
    if registry.is_empty() {
        println!("No schedules available to display.");
        return;
    }

    for schedule in registry {
        display_schedule(schedule);
    }
}
