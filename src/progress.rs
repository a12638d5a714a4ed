use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// Create a reporter only when stderr is an interactive terminal
    pub fn for_terminal() -> Option<Self> {
        if Term::stderr().is_term() {
            Some(Self::new())
        } else {
            None
        }
    }

    fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        if let Ok(bar_style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
            pb.set_style(bar_style.progress_chars("█▉▊▋▌▍▎▏ "));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            let mut frames = SPINNER_FRAMES.to_vec();
            frames.push("✓");
            pb.set_style(spinner_style.tick_strings(&frames));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn wheel_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_discovery(&mut self) {
        let _ = self.term.clear_line();
        eprintln!("{} Discovering edge-list files...", style("🔍").cyan());
        let spinner = self.create_spinner("Scanning input paths...");
        self.current_bar = Some(spinner);
    }

    pub fn checking_file(&self, path: &Path) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Found: {}", path.display()));
        } else {
            let _ = self.term.clear_line();
            eprint!(
                "\r{} Found: {}... ",
                style(self.wheel_frame()).cyan(),
                style(path.display()).dim()
            );
        }
    }

    pub fn finish_discovery(&mut self, count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if count == 0 {
            eprintln!("\r{} No edge-list files found", style("✗").red());
        } else {
            eprintln!(
                "\r{} Discovery complete: found {} {}",
                style("✓").green(),
                style(count).yellow().bold(),
                pluralize("file", count)
            );
        }
    }

    pub fn start_analysis(&mut self, total_files: usize) -> ProgressBar {
        let pb = self.create_progress_bar(total_files as u64, "Searching for polygons");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn update_analysis_progress(&self, file_name: &str) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Analyzed: {file_name}"));
            pb.inc(1);
        }
    }

    pub fn finish_analysis(&mut self, cycles_found: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        if cycles_found == 0 {
            eprintln!(
                "{} No polygons found! {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} Found {} {}",
                style("🔺").yellow().bold(),
                style(cycles_found).yellow().bold(),
                pluralize("polygon", cycles_found)
            );
        }
    }
}
