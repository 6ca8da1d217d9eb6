//! Static sample data displayed by the companion app.
//!
//! Everything here is a read-only fixture. Display text is French, matching
//! the rest of the interface.

/// Pet species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub fn icon(self) -> &'static str {
        match self {
            Species::Dog => "🐕",
            Species::Cat => "🐈",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetStatus {
    Healthy,
    Active,
    Resting,
    Alert,
}

impl PetStatus {
    pub fn label(self) -> &'static str {
        match self {
            PetStatus::Healthy => "En bonne santé",
            PetStatus::Active => "Actif",
            PetStatus::Resting => "Au repos",
            PetStatus::Alert => "Alerte",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Low => "Faible",
            ActivityLevel::Moderate => "Modéré",
            ActivityLevel::High => "Élevé",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Calm,
    Happy,
    Anxious,
    Excited,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Mood::Calm => "Calme",
            Mood::Happy => "Joyeux",
            Mood::Anxious => "Anxieux",
            Mood::Excited => "Excité",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Calm => "😌",
            Mood::Happy => "😊",
            Mood::Anxious => "😟",
            Mood::Excited => "🤩",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Health,
    Location,
    Behavior,
}

impl AlertKind {
    pub fn icon(self) -> &'static str {
        match self {
            AlertKind::Health => "❤",
            AlertKind::Location => "📍",
            AlertKind::Behavior => "🧠",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorEventKind {
    Activity,
    Bark,
    Sleep,
    Walk,
    Play,
    Meal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub id: &'static str,
    pub name: &'static str,
    pub breed: &'static str,
    pub species: Species,
    pub age_years: u32,
    pub weight_kg: u32,
    pub status: PetStatus,
    pub collar_battery: u8,
    pub collar_color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthMetrics {
    pub heart_rate: u32,
    pub heart_rate_min: u32,
    pub heart_rate_max: u32,
    pub respiratory_rate: u32,
    pub temperature: f32,
    pub steps: u32,
    pub steps_goal: u32,
    pub calories: u32,
    pub calories_goal: u32,
    pub distance_km: f32,
    pub active_minutes: u32,
    pub active_minutes_goal: u32,
    pub sleep_hours: f32,
    pub sleep_quality: u32,
}

impl HealthMetrics {
    pub fn steps_remaining(&self) -> u32 {
        self.steps_goal.saturating_sub(self.steps)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorData {
    pub stress_level: u32,
    pub barking_frequency: u32,
    pub activity_level: ActivityLevel,
    pub mood: Mood,
    pub last_bark_time: &'static str,
    pub unusual_behavior: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationData {
    pub latitude: f64,
    pub longitude: f64,
    pub address: &'static str,
    pub is_in_safe_zone: bool,
    pub last_update: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: &'static str,
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartRateSample {
    pub time: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyHeartRate {
    pub day: &'static str,
    pub avg: u32,
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepPhase {
    pub phase: &'static str,
    pub hours: f32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyActivity {
    pub day: &'static str,
    pub steps: u32,
    pub calories: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorEvent {
    pub time: &'static str,
    pub event: &'static str,
    pub kind: BehaviorEventKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressSample {
    pub time: &'static str,
    pub level: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeZone {
    pub id: &'static str,
    pub name: &'static str,
    pub radius_m: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationPoint {
    pub time: &'static str,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthTip {
    pub id: &'static str,
    pub title: &'static str,
    pub tip: &'static str,
    pub icon: &'static str,
}

pub const PET: Pet = Pet {
    id: "1",
    name: "Luna",
    breed: "Golden Retriever",
    species: Species::Dog,
    age_years: 3,
    weight_kg: 28,
    status: PetStatus::Healthy,
    collar_battery: 78,
    collar_color: "#0A84FF",
};

pub const HEALTH_METRICS: HealthMetrics = HealthMetrics {
    heart_rate: 85,
    heart_rate_min: 62,
    heart_rate_max: 142,
    respiratory_rate: 24,
    temperature: 38.5,
    steps: 8420,
    steps_goal: 10000,
    calories: 245,
    calories_goal: 350,
    distance_km: 4.2,
    active_minutes: 48,
    active_minutes_goal: 60,
    sleep_hours: 10.5,
    sleep_quality: 87,
};

pub const BEHAVIOR_DATA: BehaviorData = BehaviorData {
    stress_level: 15,
    barking_frequency: 12,
    activity_level: ActivityLevel::Moderate,
    mood: Mood::Happy,
    last_bark_time: "Il y a 2h",
    unusual_behavior: false,
};

pub const LOCATION_DATA: LocationData = LocationData {
    latitude: 48.8566,
    longitude: 2.3522,
    address: "15 Rue de la Paix, Paris",
    is_in_safe_zone: true,
    last_update: "À l'instant",
};

pub const ALERTS: &[Alert] = &[Alert {
    id: "1",
    kind: AlertKind::Health,
    severity: Severity::Info,
    title: "Objectif atteint !",
    message: "Luna a atteint 80% de son objectif d'activité quotidien",
    time: "Il y a 30 min",
    read: false,
}];

pub const HEART_RATE_HISTORY: &[HeartRateSample] = &[
    HeartRateSample { time: "00:00", value: 68 },
    HeartRateSample { time: "04:00", value: 62 },
    HeartRateSample { time: "08:00", value: 78 },
    HeartRateSample { time: "12:00", value: 95 },
    HeartRateSample { time: "16:00", value: 88 },
    HeartRateSample { time: "20:00", value: 85 },
    HeartRateSample { time: "23:59", value: 72 },
];

pub const WEEKLY_HEART_RATE: &[DailyHeartRate] = &[
    DailyHeartRate { day: "Lun", avg: 78, min: 58, max: 125 },
    DailyHeartRate { day: "Mar", avg: 82, min: 60, max: 132 },
    DailyHeartRate { day: "Mer", avg: 75, min: 55, max: 118 },
    DailyHeartRate { day: "Jeu", avg: 80, min: 62, max: 128 },
    DailyHeartRate { day: "Ven", avg: 85, min: 65, max: 142 },
    DailyHeartRate { day: "Sam", avg: 88, min: 68, max: 145 },
    DailyHeartRate { day: "Dim", avg: 76, min: 58, max: 120 },
];

pub const SLEEP_DATA: &[SleepPhase] = &[
    SleepPhase { phase: "Léger", hours: 4.5, color: "#5AC8FA" },
    SleepPhase { phase: "Profond", hours: 4.0, color: "#007AFF" },
    SleepPhase { phase: "REM", hours: 2.0, color: "#5856D6" },
];

pub const ACTIVITY_HISTORY: &[DailyActivity] = &[
    DailyActivity { day: "Lun", steps: 9200, calories: 280 },
    DailyActivity { day: "Mar", steps: 7800, calories: 230 },
    DailyActivity { day: "Mer", steps: 10500, calories: 320 },
    DailyActivity { day: "Jeu", steps: 8900, calories: 265 },
    DailyActivity { day: "Ven", steps: 11200, calories: 340 },
    DailyActivity { day: "Sam", steps: 12500, calories: 380 },
    DailyActivity { day: "Dim", steps: 6500, calories: 195 },
];

pub const BEHAVIOR_EVENTS: &[BehaviorEvent] = &[
    BehaviorEvent { time: "08:30", event: "Réveil actif", kind: BehaviorEventKind::Activity },
    BehaviorEvent { time: "10:15", event: "Aboiement (visiteur)", kind: BehaviorEventKind::Bark },
    BehaviorEvent { time: "12:00", event: "Sieste", kind: BehaviorEventKind::Sleep },
    BehaviorEvent { time: "14:30", event: "Promenade", kind: BehaviorEventKind::Walk },
    BehaviorEvent { time: "16:45", event: "Jeu actif", kind: BehaviorEventKind::Play },
    BehaviorEvent { time: "18:00", event: "Repas", kind: BehaviorEventKind::Meal },
];

pub const STRESS_HISTORY: &[StressSample] = &[
    StressSample { time: "06:00", level: 10 },
    StressSample { time: "09:00", level: 25 },
    StressSample { time: "12:00", level: 15 },
    StressSample { time: "15:00", level: 30 },
    StressSample { time: "18:00", level: 20 },
    StressSample { time: "21:00", level: 12 },
];

pub const SAFE_ZONES: &[SafeZone] = &[
    SafeZone { id: "1", name: "Maison", radius_m: 50, latitude: 48.8566, longitude: 2.3522, active: true },
    SafeZone { id: "2", name: "Parc du quartier", radius_m: 100, latitude: 48.8600, longitude: 2.3550, active: true },
    SafeZone { id: "3", name: "Vétérinaire", radius_m: 30, latitude: 48.8520, longitude: 2.3480, active: false },
];

pub const LOCATION_HISTORY: &[LocationPoint] = &[
    LocationPoint { time: "08:00", lat: 48.8566, lng: 2.3522 },
    LocationPoint { time: "10:00", lat: 48.8580, lng: 2.3540 },
    LocationPoint { time: "12:00", lat: 48.8600, lng: 2.3550 },
    LocationPoint { time: "14:00", lat: 48.8590, lng: 2.3535 },
    LocationPoint { time: "16:00", lat: 48.8570, lng: 2.3525 },
    LocationPoint { time: "18:00", lat: 48.8566, lng: 2.3522 },
];

pub const HEALTH_TIPS: &[HealthTip] = &[
    HealthTip {
        id: "1",
        title: "Hydratation",
        tip: "Assurez-vous que Luna a toujours accès à de l'eau fraîche, surtout après l'exercice.",
        icon: "💧",
    },
    HealthTip {
        id: "2",
        title: "Activité recommandée",
        tip: "Encore 1 580 pas pour atteindre l'objectif quotidien. Une courte promenade suffirait !",
        icon: "🏃",
    },
    HealthTip {
        id: "3",
        title: "Sommeil optimal",
        tip: "Luna a bien dormi cette nuit. Maintenez cette routine pour son bien-être.",
        icon: "😴",
    },
];

/// Alerts not yet marked as read, in fixture order.
pub fn unread_alerts() -> impl Iterator<Item = &'static Alert> {
    ALERTS.iter().filter(|alert| !alert.read)
}

/// Total hours across all sleep phases.
pub fn total_sleep_hours() -> f32 {
    SLEEP_DATA.iter().map(|phase| phase.hours).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_alerts() {
        assert_eq!(unread_alerts().count(), 1);
        assert_eq!(unread_alerts().next().map(|a| a.severity), Some(Severity::Info));
    }

    #[test]
    fn test_steps_remaining_matches_tip() {
        assert_eq!(HEALTH_METRICS.steps_remaining(), 1580);
    }

    #[test]
    fn test_sleep_phases_sum_to_sleep_hours() {
        assert!((total_sleep_hours() - HEALTH_METRICS.sleep_hours).abs() < f32::EPSILON);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PET.status.label(), "En bonne santé");
        assert_eq!(BEHAVIOR_DATA.mood.label(), "Joyeux");
        assert_eq!(BEHAVIOR_DATA.activity_level.label(), "Modéré");
        assert_eq!(PET.species.icon(), "🐕");
        assert_eq!(ALERTS[0].kind.icon(), "❤");
    }
}
