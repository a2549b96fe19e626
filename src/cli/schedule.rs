use omnyom_schedule::{
    CalendarWindow, Frequency, SubscriptionRequest, last_delivery_date, payment_attempts_for,
};
use time::Date;

use crate::config::Config;
use crate::view::{CalendarView, EligibilityView, ScheduleView};

use super::print_json;

pub fn schedule_view(start: Date, weeks: u32, frequency: &str) -> anyhow::Result<ScheduleView> {
    let frequency = Frequency::parse(frequency)?;
    let deliveries = SubscriptionRequest::new(start, weeks, frequency)?.delivery_schedule()?;
    let payment_attempts = payment_attempts_for(&deliveries)
        .map(Vec::from)
        .unwrap_or_default();

    tracing::info!(
        %start,
        weeks,
        %frequency,
        deliveries = deliveries.len(),
        "schedule computed"
    );

    Ok(ScheduleView::new(
        start,
        weeks,
        frequency.as_ref(),
        &deliveries,
        &payment_attempts,
    ))
}

pub fn schedule(start: Date, weeks: u32, frequency: &str, json: bool) -> anyhow::Result<()> {
    let view = schedule_view(start, weeks, frequency)?;

    if json {
        return print_json(&view);
    }

    println!("{:>4}  {:<10}  {:<10}", "#", "delivery", "production");
    for entry in &view.deliveries {
        println!(
            "{:>4}  {}  {}",
            entry.sequence, entry.delivery_date, entry.production_date
        );
    }

    println!();
    println!("payment attempts");
    for attempt in &view.payment_attempts {
        println!("  D-{}  {}", attempt.days_before, attempt.attempt_date);
    }

    Ok(())
}

/// Date-picker window for `today`, stretched to the last delivery of the
/// schedule starting at `start` when one is given.
pub fn calendar_window(
    config: &Config,
    today: Date,
    start: Option<Date>,
    weeks: u32,
    frequency: &str,
) -> anyhow::Result<(CalendarWindow, Option<Date>)> {
    let last_delivery = match start {
        Some(start) => {
            let frequency = Frequency::parse(frequency)?;
            let deliveries =
                SubscriptionRequest::new(start, weeks, frequency)?.delivery_schedule()?;
            last_delivery_date(&deliveries)
        }
        None => None,
    };

    let window = CalendarWindow::with_min_weeks(today, last_delivery, config.calendar.min_weeks);

    Ok((window, last_delivery))
}

pub fn calendar(
    config: &Config,
    today: Date,
    start: Option<Date>,
    weeks: u32,
    frequency: &str,
    json: bool,
) -> anyhow::Result<()> {
    let (window, last_delivery) = calendar_window(config, today, start, weeks, frequency)?;

    if json {
        return print_json(&CalendarView::from(&window));
    }

    println!(" Mon        Tue        Wed        Thu        Fri        Sat        Sun");
    for week in window.week_rows() {
        let row = week
            .days()
            .iter()
            .map(|day| {
                let mark = if *day == today {
                    '*'
                } else if Some(*day) == last_delivery {
                    '!'
                } else {
                    ' '
                };
                format!("{mark}{day}")
            })
            .collect::<Vec<_>>();
        println!("{}", row.join(" "));
    }

    Ok(())
}

pub fn eligibility(config: &Config, date: Date, today: Date) -> EligibilityView {
    let result = config.eligibility.window().check(date, today);

    EligibilityView {
        date: date.to_string(),
        today: today.to_string(),
        selectable: result.is_ok(),
        reason: result.err().map(|reason| reason.to_string()),
    }
}

pub fn eligible(config: &Config, date: Date, today: Date, json: bool) -> anyhow::Result<()> {
    let view = eligibility(config, date, today);

    if json {
        return print_json(&view);
    }

    match &view.reason {
        None => println!("{date} is selectable"),
        Some(reason) => println!("{date} is not selectable: {reason}"),
    }

    Ok(())
}

pub fn selectable_dates(config: &Config, today: Date) -> Vec<String> {
    config
        .eligibility
        .window()
        .selectable_dates(today)
        .iter()
        .map(Date::to_string)
        .collect()
}

pub fn selectable(config: &Config, today: Date, json: bool) -> anyhow::Result<()> {
    let dates = selectable_dates(config, today);

    if json {
        return print_json(&dates);
    }

    for date in dates {
        println!("{date}");
    }

    Ok(())
}
