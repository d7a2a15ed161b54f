//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::detector::Platform;
use crate::scoring::AxisScore;
use crate::{AnalysisResult, Grade, Severity};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
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

    /// Report a single analysis result
    pub fn report(&self, result: &AnalysisResult) {
        self.print_header(result);
        self.print_score(result);
        self.print_breakdown(result);
        self.print_aio(result);

        if !result.insights.is_empty() {
            self.print_insights(result);
        }

        self.print_priorities(result);
        println!();
    }

    /// Report multiple results with summary
    pub fn report_many(&self, results: &[AnalysisResult], stats: &AggregateStats) {
        for result in results {
            self.report(result);
            println!("{}", "─".repeat(60));
        }

        self.print_summary(stats);
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, result: &AnalysisResult) {
        let grade_colored = self.colorize_grade(&result.grade);
        println!("{}: {} ({})", result.url, result.overall_score, grade_colored);
    }

    fn print_header(&self, result: &AnalysisResult) {
        println!();
        println!(
            "{}",
            format!("📊 Content Discoverability Analysis: {}", result.url).bold()
        );
        let platform = match result.detection.platform.kind {
            Platform::None => "none".to_string(),
            p => format!("{:?}", p).to_lowercase(),
        };
        println!(
            "   Platform: {} ({:.0}% confidence) | Blog: {}",
            platform,
            result.detection.platform.confidence * 100.0,
            if result.detection.is_blog { "yes" } else { "no" }
        );
        if self.verbose {
            println!("   Reason: {}", result.detection.reason.dimmed());
        }
        println!();
    }

    fn print_score(&self, result: &AnalysisResult) {
        let grade_str = self.colorize_grade(&result.grade);
        let score_bar = self.create_score_bar(result.overall_score);
        println!("   Overall: {} {}", score_bar, grade_str.bold());
        println!();
    }

    fn print_breakdown(&self, result: &AnalysisResult) {
        println!("   {}", "Axis Breakdown:".bold());

        let axes = [
            ("SEO", &result.breakdown.seo),
            ("AEO", &result.breakdown.aeo),
            ("GEO", &result.breakdown.geo),
        ];
        for (name, axis) in axes {
            let bar = self.create_mini_bar(axis.normalized);
            let score_str = format!("{:>3}/100", axis.normalized);
            let colored_score = if axis.normalized >= 80 {
                score_str.green()
            } else if axis.normalized >= 60 {
                score_str.yellow()
            } else {
                score_str.red()
            };
            println!(
                "   {} {} {} ({}/{} raw)",
                bar, colored_score, name, axis.raw, axis.max
            );
            if self.verbose {
                self.print_failed_checks(axis);
            }
        }
        println!();
    }

    fn print_failed_checks(&self, axis: &AxisScore) {
        for check in axis.failed_by_weight().iter().take(5) {
            println!(
                "       {} {} ({} pts)",
                "✗".red(),
                check.label.dimmed(),
                check.max
            );
        }
    }

    fn print_aio(&self, result: &AnalysisResult) {
        println!("   {}", "AI Citation Estimates:".bold());
        let s = &result.aio_analysis.scores;
        let mut parts = vec![
            format!("ChatGPT {}", s.chatgpt),
            format!("Perplexity {}", s.perplexity),
            format!("Gemini {}", s.gemini),
            format!("Claude {}", s.claude),
        ];
        if let Some(grok) = s.grok {
            parts.push(format!("Grok {}", grok));
        }
        println!("   {}", parts.join(" | "));

        if self.verbose {
            for model in &result.aio_analysis.models {
                for rec in model.recommendations.iter().take(2) {
                    println!("       {} [{}] {}", "→".cyan(), model.model, rec);
                }
            }
        }
        println!();
    }

    fn print_insights(&self, result: &AnalysisResult) {
        println!("   {}", "Insights:".bold());

        let high: Vec<_> = result
            .insights
            .iter()
            .filter(|i| i.severity == Severity::High)
            .collect();
        let medium: Vec<_> = result
            .insights
            .iter()
            .filter(|i| i.severity == Severity::Medium)
            .collect();
        let low: Vec<_> = result
            .insights
            .iter()
            .filter(|i| i.severity == Severity::Low)
            .collect();

        for insight in high.iter().chain(medium.iter()) {
            self.print_insight(insight);
        }

        // Only show low-severity insights in verbose mode or small reports
        if self.verbose || result.insights.len() <= 5 {
            for insight in low {
                self.print_insight(insight);
            }
        } else if !low.is_empty() {
            println!(
                "   {} {} additional suggestions (use --verbose to show)",
                "ℹ".blue(),
                low.len()
            );
        }

        println!();
    }

    fn print_insight(&self, insight: &crate::Insight) {
        let icon = match insight.severity {
            Severity::High => "✗".red(),
            Severity::Medium => "⚠".yellow(),
            Severity::Low => "ℹ".blue(),
        };
        println!(
            "   {} [{}] {}",
            icon,
            insight.category.dimmed(),
            insight.message
        );
    }

    fn print_priorities(&self, result: &AnalysisResult) {
        if result.overall_score >= 90 {
            return;
        }
        println!("   {}", "Priorities (weakest axis first):".bold());
        for priority in &result.improvement_priorities {
            println!(
                "   {}. {}",
                priority.rank.to_string().bold(),
                priority.category
            );
            for tip in &priority.tips {
                println!("      {} {}", "→".cyan(), tip);
            }
        }
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Documents analyzed: {}",
            stats.documents_analyzed.to_string().bold()
        );
        println!(
            "   Average score:      {} ({})",
            stats.average_score.to_string().bold(),
            self.colorize_grade(&Grade::from_score(stats.average_score))
        );
        println!("   Blogs detected:     {}", stats.blogs_detected);
        println!("   Total insights:     {}", stats.total_insights);
        println!();
    }

    fn colorize_grade(&self, grade: &Grade) -> colored::ColoredString {
        let s = grade.to_string();
        match grade {
            Grade::A => s.green().bold(),
            Grade::B => s.green(),
            Grade::C => s.yellow(),
            Grade::D => s.red(),
            Grade::F => s.red().bold(),
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}%", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            if score >= 80 {
                bar.green().to_string()
            } else if score >= 60 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }

    fn create_mini_bar(&self, score: u8) -> String {
        let filled = (score as usize * 10) / 100;
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
