use rand::Rng;

use crate::error::{PlannerError, Result};
use crate::models::{DayPlan, MacroGoals, Macros, MealEntry, MealSlot, MenuItem};
use crate::planner::constants::{DAYS_PER_WEEK, OVER_TARGET_PCT, UNDER_TARGET_PCT};
use crate::planner::estimator::parse_food_text;
use crate::planner::matcher::{find_substitute, MatchConfig};
use crate::state::Catalog;

/// How a day's macro total compares against its daily goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    Under,
    OnTarget,
    Over,
}

impl ProgressBand {
    /// Under 85%, on target 85-115%, over above 115% of the goal.
    pub fn classify(total: f64, target: f64) -> Self {
        if target <= 0.0 {
            return if total <= 0.0 {
                ProgressBand::OnTarget
            } else {
                ProgressBand::Over
            };
        }

        let pct = total / target * 100.0;
        if pct < UNDER_TARGET_PCT {
            ProgressBand::Under
        } else if pct > OVER_TARGET_PCT {
            ProgressBand::Over
        } else {
            ProgressBand::OnTarget
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProgressBand::Under => "under",
            ProgressBand::OnTarget => "on target",
            ProgressBand::Over => "over",
        }
    }
}

/// Progress of one macro against its daily goal.
#[derive(Debug, Clone, Copy)]
pub struct MacroProgress {
    pub total: f64,
    pub target: f64,
    pub band: ProgressBand,
}

impl MacroProgress {
    fn new(total: f64, target: f64) -> Self {
        Self {
            total,
            target,
            band: ProgressBand::classify(total, target),
        }
    }

    pub fn percent(&self) -> f64 {
        if self.target > 0.0 {
            self.total / self.target * 100.0
        } else {
            0.0
        }
    }
}

/// Per-macro progress for one day.
#[derive(Debug, Clone, Copy)]
pub struct DayProgress {
    pub calories: MacroProgress,
    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fat: MacroProgress,
}

/// A committed catalog selection somewhere in the week.
#[derive(Debug, Clone, Copy)]
pub struct PlannedItem<'a> {
    pub day: usize,
    pub slot: MealSlot,
    pub item: &'a MenuItem,
}

/// Owns the 7x4 meal grid and mediates every slot mutation.
///
/// The catalog is injected read-only; the matcher only proposes, the
/// planner commits. Aggregates are derived on demand and never stored.
pub struct WeeklyPlanner<'a> {
    catalog: &'a Catalog,
    goals: MacroGoals,
    days: Vec<DayPlan>,
    config: MatchConfig,
}

impl<'a> WeeklyPlanner<'a> {
    pub fn new(catalog: &'a Catalog, goals: MacroGoals) -> Self {
        Self::with_config(catalog, goals, MatchConfig::default())
    }

    pub fn with_config(catalog: &'a Catalog, goals: MacroGoals, config: MatchConfig) -> Self {
        Self {
            catalog,
            goals,
            days: vec![DayPlan::default(); DAYS_PER_WEEK],
            config,
        }
    }

    pub fn goals(&self) -> MacroGoals {
        self.goals
    }

    /// Replace the daily targets wholesale (profile re-submission).
    pub fn set_goals(&mut self, goals: MacroGoals) {
        self.goals = goals;
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn day(&self, day: usize) -> Result<&DayPlan> {
        self.days.get(day).ok_or(PlannerError::DayOutOfRange(day))
    }

    fn day_mut(&mut self, day: usize) -> Result<&mut DayPlan> {
        self.days
            .get_mut(day)
            .ok_or(PlannerError::DayOutOfRange(day))
    }

    /// Manual text edit: empty text clears the slot, anything else runs
    /// the estimator and drops any prior assignment.
    pub fn edit_slot(&mut self, day: usize, slot: MealSlot, text: &str) -> Result<()> {
        let entry = self.day_mut(day)?.entry_mut(slot);
        *entry = if text.is_empty() {
            MealEntry::Empty
        } else {
            MealEntry::manual(text, parse_food_text(text))
        };
        Ok(())
    }

    pub fn clear_slot(&mut self, day: usize, slot: MealSlot) -> Result<()> {
        self.edit_slot(day, slot, "")
    }

    /// Commit an explicitly chosen catalog item into a slot.
    pub fn assign_item(&mut self, day: usize, slot: MealSlot, id: &str) -> Result<()> {
        let item = self
            .catalog
            .get(id)
            .ok_or_else(|| PlannerError::ItemNotFound(id.to_string()))?;
        *self.day_mut(day)?.entry_mut(slot) = MealEntry::assigned(item);
        Ok(())
    }

    /// Target fed to the matcher: the entry's own manual estimate when
    /// it has positive calories, otherwise the slot's ideal share of the
    /// daily goals.
    fn slot_target(&self, day: usize, slot: MealSlot) -> Result<Macros> {
        let target = match self.day(day)?.entry(slot) {
            MealEntry::Manual { macros, .. } if macros.calories > 0.0 => *macros,
            _ => self.goals.share(slot.ideal_share()),
        };
        Ok(target)
    }

    fn apply_substitute<R: Rng>(
        &mut self,
        day: usize,
        slot: MealSlot,
        exclude_ids: &[String],
        rng: &mut R,
    ) -> Result<Option<&'a MenuItem>> {
        let target = self.slot_target(day, slot)?;
        let Some(matched) =
            find_substitute(self.catalog, &target, slot, exclude_ids, &self.config, rng)
        else {
            return Ok(None);
        };

        *self.day_mut(day)?.entry_mut(slot) = MealEntry::assigned(matched.item);
        Ok(Some(matched.item))
    }

    /// Fill a slot from the menu. Returns the committed item, or `None`
    /// when the catalog is empty.
    pub fn suggest_slot<R: Rng>(
        &mut self,
        day: usize,
        slot: MealSlot,
        rng: &mut R,
    ) -> Result<Option<&'a MenuItem>> {
        self.apply_substitute(day, slot, &[], rng)
    }

    /// Re-match an assigned slot with its current item excluded, so a
    /// repeated swap is unlikely to return the same dish.
    pub fn swap_slot<R: Rng>(
        &mut self,
        day: usize,
        slot: MealSlot,
        rng: &mut R,
    ) -> Result<Option<&'a MenuItem>> {
        let exclude: Vec<String> = self
            .day(day)?
            .entry(slot)
            .assigned_id()
            .map(|id| vec![id.to_string()])
            .unwrap_or_default();
        self.apply_substitute(day, slot, &exclude, rng)
    }

    /// Apply the suggest transition to all four slots in serving order,
    /// excluding already-chosen ids so one pass never assigns the same
    /// dish twice.
    pub fn optimize_day<R: Rng>(&mut self, day: usize, rng: &mut R) -> Result<Vec<&'a MenuItem>> {
        let mut used: Vec<String> = Vec::new();
        let mut chosen = Vec::new();

        for slot in MealSlot::ALL {
            if let Some(item) = self.apply_substitute(day, slot, &used, rng)? {
                used.push(item.id.clone());
                chosen.push(item);
            }
        }

        Ok(chosen)
    }

    /// Elementwise sum of one day's four entries.
    pub fn day_totals(&self, day: usize) -> Result<Macros> {
        Ok(self.day(day)?.totals())
    }

    /// Sum over all seven days.
    pub fn weekly_totals(&self) -> Macros {
        let mut total = Macros::ZERO;
        for day in &self.days {
            total.add(&day.totals());
        }
        total
    }

    /// Classify one day's totals against the daily goals.
    pub fn day_progress(&self, day: usize) -> Result<DayProgress> {
        let totals = self.day_totals(day)?;
        let goals = self.goals.as_macros();

        Ok(DayProgress {
            calories: MacroProgress::new(totals.calories, goals.calories),
            protein: MacroProgress::new(totals.protein, goals.protein),
            carbs: MacroProgress::new(totals.carbs, goals.carbs),
            fat: MacroProgress::new(totals.fat, goals.fat),
        })
    }

    /// Every committed selection across the week, in day/slot order.
    pub fn planned_items(&self) -> Vec<PlannedItem<'a>> {
        let mut planned = Vec::new();
        for (day, plan) in self.days.iter().enumerate() {
            for (slot, entry) in plan.iter() {
                if let Some(item) = entry.assigned_id().and_then(|id| self.catalog.get(id)) {
                    planned.push(PlannedItem { day, slot, item });
                }
            }
        }
        planned
    }

    /// Price of every assigned slot across the week.
    pub fn weekly_price_total(&self) -> u32 {
        self.planned_items().iter().map(|p| p.item.price).sum()
    }

    /// Catalog items with quantities, for handing the plan to a cart.
    pub fn cart_quantities(&self) -> Vec<(&'a MenuItem, u32)> {
        let mut quantities: Vec<(&'a MenuItem, u32)> = Vec::new();
        for planned in self.planned_items() {
            match quantities
                .iter_mut()
                .find(|(item, _)| item.id == planned.item.id)
            {
                Some((_, qty)) => *qty += 1,
                None => quantities.push((planned.item, 1)),
            }
        }
        quantities
    }
}
