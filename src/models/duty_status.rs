use serde::Serialize;

/// Duty status of a driver during one activity interval.
///
/// The loading/unloading sub-labels are distinct on the wire but share the
/// On Duty row on the log grid.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDuty,
    OnDutyLoading,
    OnDutyUnloading,
}

impl DutyStatus {
    /// Convert wire label → enum. Returns None for labels outside the
    /// known enumeration; callers decide the fallback.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Off Duty" => Some(Self::OffDuty),
            "Sleeper Berth" => Some(Self::SleeperBerth),
            "Driving" => Some(Self::Driving),
            "On Duty" => Some(Self::OnDuty),
            "On Duty (Loading)" => Some(Self::OnDutyLoading),
            "On Duty (Unloading)" => Some(Self::OnDutyUnloading),
            _ => None,
        }
    }

    /// Convert enum → wire label.
    pub fn as_label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDuty => "On Duty",
            DutyStatus::OnDutyLoading => "On Duty (Loading)",
            DutyStatus::OnDutyUnloading => "On Duty (Unloading)",
        }
    }

    /// The four grid rows, top to bottom. Sub-labels collapse onto OnDuty.
    pub fn row(&self) -> Self {
        match self {
            DutyStatus::OnDutyLoading | DutyStatus::OnDutyUnloading => DutyStatus::OnDuty,
            other => *other,
        }
    }

    pub fn is_driving(&self) -> bool {
        matches!(self, DutyStatus::Driving)
    }
}

/// Grid rows in top-to-bottom order, used wherever per-row output must be
/// deterministic (summary column, printed totals).
pub const GRID_ROWS: [DutyStatus; 4] = [
    DutyStatus::OffDuty,
    DutyStatus::SleeperBerth,
    DutyStatus::Driving,
    DutyStatus::OnDuty,
];
