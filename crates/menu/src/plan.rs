use time::{Date, Month};

use crate::Stage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyMeal {
    pub date: Date,
    pub menus: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyMealPlan {
    pub year: i32,
    pub month: Month,
    pub stage: Stage,
    pub days: Vec<DailyMeal>,
}

impl MonthlyMealPlan {
    pub fn menus_on(&self, date: Date) -> Option<&[&'static str]> {
        self.days
            .iter()
            .find(|day| day.date == date)
            .map(|day| day.menus.as_slice())
    }
}

/// Fills every day of the month with the stage's menus in rotation.
///
/// Each day takes the next `menus_per_day` names, wrapping to the start of
/// the list, so the rotation carries over from one day to the next.
pub fn generate_monthly_meal_plan(
    stage: Stage,
    year: i32,
    month: u8,
) -> Result<MonthlyMealPlan, MenuError> {
    let invalid = || MenuError::InvalidMonth { year, month };
    let calendar_month = Month::try_from(month).map_err(|_| invalid())?;
    let first = Date::from_calendar_date(year, calendar_month, 1).map_err(|_| invalid())?;

    let menus = stage.menus();
    let mut rotation = menus.iter().copied().cycle();
    let mut days = Vec::with_capacity(31);
    let mut date = Some(first);

    while let Some(current) = date.filter(|d| d.month() == calendar_month) {
        days.push(DailyMeal {
            date: current,
            menus: rotation.by_ref().take(stage.menus_per_day()).collect(),
        });
        date = current.next_day();
    }

    tracing::debug!(
        stage = %stage,
        year,
        month,
        days = days.len(),
        "monthly meal plan generated"
    );

    Ok(MonthlyMealPlan {
        year,
        month: calendar_month,
        stage,
        days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_early_december_rotation_wraps() {
        let plan = generate_monthly_meal_plan(Stage::Early, 2025, 12).expect("valid month");

        assert_eq!(plan.days.len(), 31);
        assert!(plan.days.iter().all(|d| d.menus.len() == 2));
        assert_eq!(
            plan.menus_on(date!(2025-12-01)),
            Some(&["한우청경채죽", "양배추당근죽"][..])
        );
        // 33 menus, two a day: the 17th uses the last menu then wraps
        assert_eq!(
            plan.menus_on(date!(2025-12-17)),
            Some(&["브로콜리양배추죽", "한우청경채죽"][..])
        );
    }

    #[test]
    fn test_mid_stage_three_menus_a_day() {
        let plan = generate_monthly_meal_plan(Stage::Mid, 2024, 2).expect("valid month");

        assert_eq!(plan.days.len(), 29);
        assert_eq!(plan.month, Month::February);
        assert!(plan.days.iter().all(|d| d.menus.len() == 3));
        assert_eq!(plan.days[0].menus[0], "한우가지두부죽");
        // day 9 starts at index 24
        assert_eq!(
            plan.days[8].menus,
            vec!["한우검은콩애호박죽", "사과브로콜리죽", "한우가지두부죽"]
        );
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(
            generate_monthly_meal_plan(Stage::Early, 2025, 13),
            Err(MenuError::InvalidMonth {
                year: 2025,
                month: 13
            })
        );
        assert!(generate_monthly_meal_plan(Stage::Early, 2025, 0).is_err());
    }

    #[test]
    fn test_menus_on_outside_month() {
        let plan = generate_monthly_meal_plan(Stage::Early, 2025, 12).expect("valid month");

        assert_eq!(plan.menus_on(date!(2026-01-01)), None);
    }
}
