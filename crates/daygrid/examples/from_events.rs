//! Example: laying out a day from events built in code
//!
//! This example builds a day's events directly, without parsing a schedule,
//! and prints the column each one was given.

use daygrid::{event::Event, layout::LayoutEngine, time::Timestamp};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let at = |time: &str| format!("2024-05-06T{time}").parse::<Timestamp>();

    let events = [
        Event::new("airport-run", at("07:00")?, Some(at("08:30")?)),
        Event::new("school-run", at("07:30")?, Some(at("08:00")?)),
        Event::new("clinic-run", at("08:00")?, Some(at("09:00")?)),
        // Reminders carry no end and get the default hour.
        Event::new("van-3-insurance", at("12:00")?, None),
        Event::new("driver-12-leave", at("12:00")?, None),
    ];

    let layout = LayoutEngine::new().compute(&events);

    for cluster in layout.clusters() {
        println!(
            "{} - {} ({} columns)",
            cluster.span().start(),
            cluster.span().end(),
            cluster.column_count()
        );
        for id in cluster.events() {
            let position = layout.position(id).expect("Every event is placed");
            println!(
                "  {id:<16} left {:>6.2}%  width {:>6.2}%",
                position.left(),
                position.width()
            );
        }
    }

    Ok(())
}
