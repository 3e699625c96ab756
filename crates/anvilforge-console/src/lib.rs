//! Colorful console output for planner events.
//!
//! Provides a custom `tracing` layer that formats planner events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (plan and search start/end)
//! - **WARN**: Rejected goals
//! - **DEBUG**: Each strictly shorter sequence the search finds

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "anvilforge_solver=info";

/// Initializes the planner console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the AnvilForge banner and sets up tracing. `RUST_LOG` overrides
/// the default `anvilforge_solver=info` directive.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let default_directive: Directive = DEFAULT_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into());

        let filter = EnvFilter::builder()
            .with_default_directive(default_directive)
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlannerConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
    _            _ _ _____
   / \   _ ____ _(_) |  ___|__  _ __ __ _  ___
  / _ \ | '_ \ \ / / | | |_ / _ \| '__/ _` |/ _ \
 / ___ \| | | \ V /| | |  _| (_) | | | (_| |  __/
/_/   \_\_| |_|\_/ |_|_|_|  \___/|_|  \__, |\___|
                                      |___/
"#;

    let version_line = format!(
        "                 v{} - Anvil Sequence Planner\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats planner events with colors.
pub struct PlannerConsoleLayer;

impl<S: Subscriber> Layer<S> for PlannerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        if !target.starts_with("anvilforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    goal_position: Option<i64>,
    pre_end_position: Option<i64>,
    final_position: Option<i64>,
    displacement: Option<i64>,
    end_delta: Option<i64>,
    min: Option<i64>,
    max: Option<i64>,
    end_steps: Option<u64>,
    steps: Option<u64>,
    nodes: Option<u64>,
    improvements: Option<u64>,
    pruned: Option<u64>,
    duration_ms: Option<u64>,
    speed: Option<u64>,
    length: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "length" => self.length = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "end_steps" => self.end_steps = Some(value),
            "steps" => self.steps = Some(value),
            "nodes" => self.nodes = Some(value),
            "improvements" => self.improvements = Some(value),
            "pruned" => self.pruned = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "speed" => self.speed = Some(value),
            "length" => self.length = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "goal_position" => self.goal_position = Some(value),
            "pre_end_position" => self.pre_end_position = Some(value),
            "final_position" => self.final_position = Some(value),
            "displacement" => self.displacement = Some(value),
            "end_delta" => self.end_delta = Some(value),
            "min" => self.min = Some(value),
            "max" => self.max = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "event" {
            self.event = Some(value.to_string());
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "plan_start" => format_plan_start(v),
        "invalid_goal" => format_invalid_goal(v),
        "search_start" => format_search_start(v),
        "improved" => format_improved(v),
        "search_end" => format_search_end(v),
        "plan_end" => format_plan_end(v),
        _ => String::new(),
    }
}

fn format_plan_start(v: &EventVisitor) -> String {
    format!(
        "{} Planning │ goal {} │ {} end steps (delta {}) │ lead-in target {}",
        "▶".bright_green().bold(),
        v.goal_position.unwrap_or(0).bright_yellow(),
        v.end_steps.unwrap_or(0).bright_yellow(),
        format_signed(v.end_delta.unwrap_or(0)),
        v.pre_end_position.unwrap_or(0).bright_yellow(),
    )
}

fn format_invalid_goal(v: &EventVisitor) -> String {
    format!(
        "{} Invalid goal │ position {} outside [{}, {}]",
        "✗".bright_red().bold(),
        v.pre_end_position.unwrap_or(0).bright_red(),
        v.min.unwrap_or(0),
        v.max.unwrap_or(0),
    )
}

fn format_search_start(v: &EventVisitor) -> String {
    format!(
        "{} Search started │ displacement {}",
        "▶".bright_blue(),
        format_signed(v.displacement.unwrap_or(0)),
    )
}

fn format_improved(v: &EventVisitor) -> String {
    format!(
        "{} Improved │ length {} │ {} nodes",
        "⚡".bright_cyan(),
        v.length.as_deref().unwrap_or("?").bright_green(),
        v.nodes
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_black(),
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let length = match v.length.as_deref() {
        Some("None") | None => "none".bright_red().to_string(),
        Some(s) => s
            .trim_start_matches("Some(")
            .trim_end_matches(')')
            .bright_green()
            .to_string(),
    };

    format!(
        "{} Search ended │ {} │ {} nodes │ {} nodes/s │ {} pruned │ {} improvements │ length {}",
        "◀".bright_blue(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        v.nodes
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        v.speed.unwrap_or(0).to_formatted_string(&Locale::en),
        v.pruned.unwrap_or(0).to_formatted_string(&Locale::en),
        v.improvements.unwrap_or(0),
        length,
    )
}

fn format_plan_end(v: &EventVisitor) -> String {
    format!(
        "{} Plan complete │ {} lead-in steps │ final position {}",
        "■".bright_cyan().bold(),
        v.steps.unwrap_or(0).bright_yellow(),
        v.final_position.unwrap_or(0).bright_green().bold(),
    )
}

fn format_signed(value: i64) -> String {
    if value > 0 {
        format!("+{}", value).bright_green().to_string()
    } else if value < 0 {
        value.to_string().bright_red().to_string()
    } else {
        value.to_string().white().to_string()
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("something_else".into()),
            ..Default::default()
        };
        assert!(format_event(&visitor).is_empty());
        assert!(format_event(&EventVisitor::default()).is_empty());
    }

    #[test]
    fn test_search_end_length() {
        let visitor = EventVisitor {
            event: Some("search_end".into()),
            nodes: Some(12_345),
            speed: Some(2_500_000),
            length: Some("Some(5)".into()),
            ..Default::default()
        };
        let output = format_event(&visitor);
        assert!(output.contains("12,345"));
        assert!(output.contains("2,500,000"));
        assert!(output.contains('5'));
        assert!(!output.contains("Some("));
    }

    #[test]
    fn test_invalid_goal() {
        let visitor = EventVisitor {
            event: Some("invalid_goal".into()),
            pre_end_position: Some(201),
            min: Some(1),
            max: Some(150),
            ..Default::default()
        };
        let output = format_event(&visitor);
        assert!(output.contains("201"));
        assert!(output.contains("150"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
