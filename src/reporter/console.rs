//! Console reporter with colored output

use crate::archetypes::{self, Archetype};
use crate::{Axis, Outcome};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show the axis pole comparison panels
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a classification result
    pub fn report(&self, outcome: &Outcome) {
        let archetype = archetypes::lookup(&outcome.type_code);
        self.print_header(outcome, archetype);
        self.print_archetype(archetype);
        self.print_code_breakdown(outcome);
        self.print_axis_chart(outcome);
        if self.verbose {
            self.print_pole_comparison();
        }
        println!();
    }

    /// Report in quiet mode (one line)
    pub fn report_quiet(&self, outcome: &Outcome) {
        let averages = outcome.axis_averages.rounded();
        println!(
            "{} 신학={} 동력={} 사회={} 문화={}",
            outcome.type_code.to_string().bold(),
            averages.theology,
            averages.drive,
            averages.society,
            averages.culture
        );
    }

    fn print_header(&self, outcome: &Outcome, archetype: &Archetype) {
        println!();
        println!("{}", "🎉 분석이 완료되었습니다!".green());
        println!();
        println!(
            "{} {}",
            format!("당신의 유형: [{}]", outcome.type_code).bold(),
            format!("\"{}\"", archetype.title).bold()
        );
        println!();
    }

    fn print_archetype(&self, archetype: &Archetype) {
        println!("   👤 {}", archetype.person.bold());
        if !archetype.quote.is_empty() {
            println!("   ❝ {} ❞", archetype.quote.italic());
        }
        if !archetype.keywords.is_empty() {
            let tags: Vec<String> = archetype
                .keywords
                .iter()
                .map(|k| format!("#{}", k))
                .collect();
            println!("   {}", tags.join(" ").cyan());
        }
        println!();
        println!("   {}", archetype.description);
        println!();
    }

    fn print_code_breakdown(&self, outcome: &Outcome) {
        println!("   {}", "🧩 나의 코드 해설".bold());
        for symbol in outcome.type_code.symbols() {
            match archetypes::code_letter(symbol) {
                Some(letter) => println!(
                    "   {} {:<18} {}",
                    symbol.to_string().bold(),
                    letter.title,
                    letter.description.dimmed()
                ),
                None => println!("   {}", symbol),
            }
        }
        println!();
    }

    fn print_axis_chart(&self, outcome: &Outcome) {
        println!("   {}", "📊 신앙 좌표".bold());
        let averages = outcome.axis_averages.rounded();
        let labels = [
            (Axis::Theology, "신학(진보)"),
            (Axis::Drive, "동력(체험)"),
            (Axis::Society, "사회(참여)"),
            (Axis::Culture, "문화(현대)"),
        ];
        for (axis, label) in labels {
            let bar = self.create_axis_bar(axis, averages.get(axis));
            println!("   {:<10} {} {:>4}", label, bar, averages.get(axis));
        }
        println!();
    }

    fn print_pole_comparison(&self) {
        println!("   {}", "📚 8가지 성향 기호 완전 정복".bold());
        for axis in Axis::ALL {
            let cmp = archetypes::axis_comparison(axis);
            println!();
            println!("   {}", cmp.title.bold());
            println!(
                "   {} {:<18} {}",
                cmp.low.code.to_string().blue(),
                cmp.low.name,
                cmp.low.description.dimmed()
            );
            println!(
                "   {} {:<18} {}",
                cmp.high.code.to_string().green(),
                cmp.high.name,
                cmp.high.description.dimmed()
            );
        }
        println!();
    }

    /// 20-cell bar over the 0-10 scale, tinted per axis.
    fn create_axis_bar(&self, axis: Axis, average: f64) -> String {
        let filled = ((average * 2.0).round() as usize).min(20);
        let empty = 20 - filled;
        let bar = format!("[{}{}]", "█".repeat(filled), "░".repeat(empty));

        if self.use_colors {
            match axis {
                Axis::Theology => bar.blue().to_string(),
                Axis::Drive => bar.red().to_string(),
                Axis::Society => bar.green().to_string(),
                Axis::Culture => bar.yellow().to_string(),
            }
        } else {
            bar
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AxisAverages;

    #[test]
    fn axis_bar_fills_proportionally() {
        let reporter = ConsoleReporter::new().without_colors();
        assert_eq!(
            reporter.create_axis_bar(Axis::Theology, 10.0),
            format!("[{}]", "█".repeat(20))
        );
        assert_eq!(
            reporter.create_axis_bar(Axis::Theology, 0.0),
            format!("[{}]", "░".repeat(20))
        );
        let half = reporter.create_axis_bar(Axis::Theology, 5.0);
        assert_eq!(half.matches('█').count(), 10);
        assert_eq!(half.matches('░').count(), 10);
    }

    #[test]
    fn axis_bar_clamps_above_scale() {
        let reporter = ConsoleReporter::new().without_colors();
        let bar = reporter.create_axis_bar(Axis::Drive, 12.0);
        assert_eq!(bar.matches('█').count(), 20);
    }

    #[test]
    fn report_does_not_panic_on_fallback_archetype() {
        let outcome = Outcome {
            type_code: "XXXX".parse().unwrap(),
            axis_averages: AxisAverages::default(),
        };
        ConsoleReporter::new().without_colors().verbose().report(&outcome);
    }
}
