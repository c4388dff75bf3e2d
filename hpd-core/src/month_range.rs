use crate::calendar_month::CalendarMonth;
use crate::vocabulary::AggregationStep;

/// A month range iterator that yields each month from the start month
/// through the end month (inclusive). Empty when start is after end.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct MonthRange(Option<CalendarMonth>, CalendarMonth);

impl Iterator for MonthRange {
    type Item = CalendarMonth;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.0.filter(|month| *month <= self.1)?;
        self.0 = current.succ();
        Some(current)
    }
}

impl MonthRange {
    pub fn new(start: CalendarMonth, end: CalendarMonth) -> MonthRange {
        MonthRange(Some(start), end)
    }

    /// Distinct reporting period keys covered by this range, in order.
    pub fn period_keys(self, step: AggregationStep) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for month in self {
            let key = step.period_key(&month);
            if keys.last() != Some(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

impl AggregationStep {
    /// The analytics backend's bucket label for `month`:
    /// "2023" (yearly), "2023-Q1" (quarterly) or "2023-01" (monthly).
    pub fn period_key(&self, month: &CalendarMonth) -> String {
        match self {
            AggregationStep::Yearly => format!("{:04}", month.year()),
            AggregationStep::Quarterly => format!("{:04}-Q{}", month.year(), month.quarter()),
            AggregationStep::Monthly => format!("{:04}-{:02}", month.year(), month.month()),
        }
    }
}
