use omnyom_menu::{Stage, generate_monthly_meal_plan};

use crate::view::MealPlanView;

use super::print_json;

pub fn meal_plan(stage: &str, year: i32, month: u8) -> anyhow::Result<MealPlanView> {
    let stage = stage
        .parse::<Stage>()
        .map_err(|_| anyhow::anyhow!("unknown stage `{stage}` (expected early or mid)"))?;
    let plan = generate_monthly_meal_plan(stage, year, month)?;

    Ok(MealPlanView::from(&plan))
}

pub fn menu(stage: &str, year: i32, month: u8, json: bool) -> anyhow::Result<()> {
    let view = meal_plan(stage, year, month)?;

    if json {
        return print_json(&view);
    }

    println!("{} {}-{:02}", view.stage_id, view.year, view.month);
    for day in &view.days {
        println!("{}  {}", day.date, day.menus.join(", "));
    }

    Ok(())
}
