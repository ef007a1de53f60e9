use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStringError;

/// Leniently typed JSON scalar. The backend services disagree on whether
/// counters and ids arrive as numbers or strings; anything else degrades
/// instead of failing the whole payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum JsonNum {
    Number(i64),
    Float(f64),
    String(String),
    Other(serde_json::Value),
}

impl JsonNum {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonNum::Number(n) => Some(*n),
            JsonNum::Float(f) => Some(*f as i64),
            JsonNum::String(s) => s.trim().parse::<i64>().ok(),
            JsonNum::Other(_) => None,
        }
    }

    pub fn to_num(&self) -> i64 {
        self.as_i64().unwrap_or(0)
    }

    pub fn to_display(&self) -> String {
        match self {
            JsonNum::Number(n) => n.to_string(),
            JsonNum::Float(f) => f.to_string(),
            JsonNum::String(s) => s.to_owned(),
            JsonNum::Other(_) => String::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum TimerAction {
    Start,
    Pause,
    Resume,
    Reset,
}

impl TimerAction {
    pub fn get_all() -> Vec<TimerAction> {
        vec![TimerAction::Start, TimerAction::Pause, TimerAction::Resume, TimerAction::Reset]
    }
}

impl FromStr for TimerAction {
    type Err = ParseStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(TimerAction::Start),
            "pause" => Ok(TimerAction::Pause),
            "resume" => Ok(TimerAction::Resume),
            "reset" => Ok(TimerAction::Reset),
            _ => Err(ParseStringError),
        }
    }
}

impl Display for TimerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimerAction::Start => write!(f, "start"),
            TimerAction::Pause => write!(f, "pause"),
            TimerAction::Resume => write!(f, "resume"),
            TimerAction::Reset => write!(f, "reset"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum QuarterAction {
    Advance,
    AutoAdvance,
}

impl FromStr for QuarterAction {
    type Err = ParseStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "advance" => Ok(QuarterAction::Advance),
            "auto-advance" => Ok(QuarterAction::AutoAdvance),
            _ => Err(ParseStringError),
        }
    }
}

impl Display for QuarterAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuarterAction::Advance => write!(f, "advance"),
            QuarterAction::AutoAdvance => write!(f, "auto-advance"),
        }
    }
}
