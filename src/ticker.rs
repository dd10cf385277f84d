use std::rc::Rc;

use yew::Reducible;

const READY: &str = "SYSTEM_READY";
const ROTATION: [&str; 4] = ["SYSTEM_OPTIMAL", "SSL_SECURE", "SERVERS_ONLINE", "BANDWIDTH_READY"];

pub fn version_tag() -> String {
    format!("V.{}_STABLE", env!("CARGO_PKG_VERSION"))
}

/// Cosmetic status line in the corner widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    ticks: usize,
    messages: Vec<String>,
}

pub enum TickerAction {
    Advance,
}

impl Default for Ticker {
    fn default() -> Self {
        let mut messages: Vec<String> = ROTATION.iter().map(|m| m.to_string()).collect();
        messages.push(version_tag());
        Self { ticks: 0, messages }
    }
}

impl Ticker {
    pub fn current(&self) -> &str {
        if self.ticks == 0 {
            READY
        } else {
            &self.messages[self.ticks % self.messages.len()]
        }
    }

    pub fn advanced(&self) -> Self {
        Self {
            ticks: self.ticks + 1,
            messages: self.messages.clone(),
        }
    }
}

impl Reducible for Ticker {
    type Action = TickerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TickerAction::Advance => Rc::new(self.advanced()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_ready_then_cycles_from_second_entry() {
        let mut t = Ticker::default();
        assert_eq!(t.current(), "SYSTEM_READY");
        t = t.advanced();
        assert_eq!(t.current(), "SSL_SECURE");
        for _ in 0..3 {
            t = t.advanced();
        }
        assert_eq!(t.current(), version_tag());
        t = t.advanced();
        assert_eq!(t.current(), "SYSTEM_OPTIMAL");
    }

    #[test]
    fn reducer_advances() {
        let t = Rc::new(Ticker::default());
        let t = t.reduce(TickerAction::Advance);
        assert_eq!(t.current(), "SSL_SECURE");
    }
}
