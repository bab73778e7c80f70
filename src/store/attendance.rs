use crate::clock::Clock;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus, WorkingHours};
use crate::seed;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};
use utoipa::ToSchema;

/// Fixed times and labels applied when a status is marked.
#[derive(Debug, Clone)]
pub struct AttendancePolicy {
    /// Check-in recorded for a late arrival.
    pub late_check_in: NaiveTime,
    /// Check-out recorded for a half day.
    pub half_day_check_out: NaiveTime,
    pub half_day_hours: WorkingHours,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            late_check_in: NaiveTime::from_hms_opt(9, 30, 0).unwrap_or_default(),
            half_day_check_out: NaiveTime::from_hms_opt(13, 0, 0).unwrap_or_default(),
            half_day_hours: WorkingHours::hours(4),
        }
    }
}

/// Times and label a status produces at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derived {
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub working_hours: WorkingHours,
}

impl AttendancePolicy {
    pub fn derive(&self, status: AttendanceStatus, now: NaiveDateTime) -> Derived {
        let current = truncate_to_minute(now.time());

        // Only half-day carries an hours label.
        match status {
            AttendanceStatus::Present => Derived {
                check_in: Some(current),
                check_out: None,
                working_hours: WorkingHours::default(),
            },
            AttendanceStatus::Late => Derived {
                check_in: Some(self.late_check_in),
                check_out: None,
                working_hours: WorkingHours::default(),
            },
            AttendanceStatus::Absent => Derived {
                check_in: None,
                check_out: None,
                working_hours: WorkingHours::default(),
            },
            AttendanceStatus::HalfDay => Derived {
                check_in: Some(current),
                check_out: Some(self.half_day_check_out),
                working_hours: self.half_day_hours,
            },
        }
    }
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// What a mark did to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkOutcome {
    Updated(AttendanceRecord),
    Created(AttendanceRecord),
    /// No record of the employee exists on any date; nothing changed.
    UnknownEmployee,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    #[schema(value_type = String, format = "date", example = "2024-01-16")]
    pub date: NaiveDate,
    #[schema(example = 5)]
    pub total: usize,
    #[schema(example = 2)]
    pub present: usize,
    #[schema(example = 1)]
    pub late: usize,
    #[schema(example = 1)]
    pub absent: usize,
    #[schema(example = 1)]
    pub half_day: usize,
    /// `(present + late) / total` as a rounded percentage.
    #[schema(example = 60)]
    pub rate: usize,
}

impl AttendanceSummary {
    fn of(date: NaiveDate, records: &[AttendanceRecord]) -> Self {
        let count = |s: AttendanceStatus| records.iter().filter(|r| r.status == s).count();

        let total = records.len();
        let present = count(AttendanceStatus::Present);
        let late = count(AttendanceStatus::Late);
        let rate = if total == 0 {
            0
        } else {
            // round half up, integer only
            ((present + late) * 200 + total) / (2 * total)
        };

        Self {
            date,
            total,
            present,
            late,
            absent: count(AttendanceStatus::Absent),
            half_day: count(AttendanceStatus::HalfDay),
            rate,
        }
    }
}

/// In-memory attendance records, at most one per employee and day.
///
/// Constructed once by the application and shared by handle; every mark runs
/// under the write lock so a read that follows it observes the change.
pub struct AttendanceRegistry {
    records: RwLock<Vec<AttendanceRecord>>,
    clock: Arc<dyn Clock>,
    policy: AttendancePolicy,
}

impl AttendanceRegistry {
    pub fn new(
        clock: Arc<dyn Clock>,
        policy: AttendancePolicy,
        initial: Vec<AttendanceRecord>,
    ) -> Self {
        let mut records: Vec<AttendanceRecord> = Vec::with_capacity(initial.len());
        for record in initial {
            if records.iter().any(|r| r.is_for(&record.employee_id, record.date)) {
                warn!(
                    employee_id = %record.employee_id,
                    date = %record.date,
                    "Dropping duplicate attendance record"
                );
                continue;
            }
            records.push(record);
        }

        Self {
            records: RwLock::new(records),
            clock,
            policy,
        }
    }

    /// Registry holding the demo records for the clock's current day.
    pub fn seeded(clock: Arc<dyn Clock>, policy: AttendancePolicy) -> Self {
        let today = clock.today();
        let registry = Self::new(clock, policy, seed::attendance(today));
        info!(date = %today, records = registry.len(), "Attendance registry seeded");
        registry
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Sets `status` for `employee_id` on `date` (today when `None`).
    ///
    /// Updates the existing record for that day, or appends one whose
    /// name and department are copied from any other record of the
    /// employee. An employee with no record at all is left untouched.
    pub fn mark_attendance(
        &self,
        employee_id: &str,
        status: AttendanceStatus,
        date: Option<NaiveDate>,
    ) -> MarkOutcome {
        let now = self.clock.now();
        let date = date.unwrap_or_else(|| now.date());
        let derived = self.policy.derive(status, now);

        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(record) = records.iter_mut().find(|r| r.is_for(employee_id, date)) {
            record.status = status;
            record.check_in = derived.check_in;
            record.check_out = derived.check_out;
            record.working_hours = derived.working_hours;

            debug!(employee_id, %date, %status, id = %record.id, "Attendance updated");
            return MarkOutcome::Updated(record.clone());
        }

        let Some(known) = records.iter().find(|r| r.employee_id == employee_id) else {
            warn!(employee_id, %date, %status, "No attendance history for employee, mark ignored");
            return MarkOutcome::UnknownEmployee;
        };

        let record = AttendanceRecord {
            id: AttendanceRecord::derived_id(employee_id, date),
            employee_id: known.employee_id.clone(),
            employee_name: known.employee_name.clone(),
            department: known.department.clone(),
            date,
            check_in: derived.check_in,
            check_out: derived.check_out,
            status,
            working_hours: derived.working_hours,
        };
        records.push(record.clone());

        debug!(employee_id, %date, %status, id = %record.id, "Attendance created");
        MarkOutcome::Created(record)
    }

    /// Records for `date`, in registry order.
    pub fn attendance_by_date(&self, date: NaiveDate) -> Vec<AttendanceRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect()
    }

    pub fn today_attendance(&self) -> Vec<AttendanceRecord> {
        self.attendance_by_date(self.today())
    }

    /// Snapshot of every record.
    pub fn records(&self) -> Vec<AttendanceRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn summary(&self, date: NaiveDate) -> AttendanceSummary {
        AttendanceSummary::of(date, &self.attendance_by_date(date))
    }
}
