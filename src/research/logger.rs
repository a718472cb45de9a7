//! Provides a logger that traces boosting runs.
use colored::Colorize;

use crate::booster::Booster;
use crate::common::Scalar;
use crate::common::utils::entropy;
use crate::error::Result;
use crate::hypothesis::Regressor;
use crate::research::Research;
use crate::weak_learner::WeakLearner;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;

const DEFAULT_ROUND: usize = 100;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Entropy,MaxCount,Time\n";

/// Struct `Logger` provides a generic function that
/// logs the sampling-distribution entropy, the current maximal draw
/// count, and the running time for each round of boosting.
pub struct Logger<B, W> {
    booster: B,
    weak_learner: W,
    round: usize,
}

impl<B, W> Logger<B, W> {
    /// Create a new instance of `Logger`.
    pub fn new(booster: B, weak_learner: W) -> Self {
        Self { booster, weak_learner, round: DEFAULT_ROUND }
    }

    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100`
    /// rounds. If you don't want to print the log, set `usize::MAX`.
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round;
        self
    }

    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "ROUND".bold().red(),
            "ENTROPY".bold().blue(),
            "MAX CNT".bold().green(),
            "TIME".bold().cyan(),
        );
    }

    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as [`Booster::run`],
    /// measuring running time and writing one CSV record per round to
    /// `filename` on top of it.
    pub fn run<T, P>(&mut self, filename: P) -> Result<B::Output>
        where T: Scalar,
              B: Booster<T> + Research,
              W: WeakLearner<T>,
              W::Hypothesis: Regressor<T>,
              P: AsRef<Path>,
    {
        let mut file = File::create(filename)
            .expect("failed to create the trace file");
        file.write_all(HEADER.as_bytes())
            .expect("failed to write the trace header");

        self.booster.preprocess(&self.weak_learner)?;
        self.print_stats::<T>();

        let now = Instant::now();

        if self.round != usize::MAX {
            self.print_log_header();
        }

        let mut iteration = 1;
        loop {
            let flow = self.booster.boost(&self.weak_learner, iteration)?;

            let time_acc = now.elapsed().as_millis();
            let ent = entropy(self.booster.current_pmf());
            let max_count = self.booster.current_counts()
                .iter()
                .max()
                .copied()
                .unwrap_or(0);

            let line = format!("{ent},{max_count},{time_acc}\n");
            file.write_all(line.as_bytes())
                .expect("failed to write a trace record");

            if self.round != usize::MAX && iteration % self.round == 0 {
                println!(
                    "{} {}\t{}\t{}\t{}",
                    "[LOG]".bold().magenta(),
                    format!("{iteration:>WIDTH$}").red(),
                    format!("{ent:>WIDTH$.PREC_WIDTH$}").blue(),
                    format!("{max_count:>WIDTH$}").green(),
                    time_format(time_acc).cyan(),
                );
            }

            if flow.is_break() {
                if self.round != usize::MAX {
                    println!(
                        "{} {}\t{}\t{}\t{}\n",
                        "[FIN]".bold().bright_green(),
                        format!("{iteration:>WIDTH$}").red(),
                        format!("{ent:>WIDTH$.PREC_WIDTH$}").bold().blue(),
                        format!("{max_count:>WIDTH$}").bold().green(),
                        time_format(time_acc).bold().cyan(),
                    );
                }
                break;
            }
            iteration += 1;
        }

        self.booster.postprocess(&self.weak_learner)
    }

    /// print current settings.
    fn print_stats<T>(&self)
        where T: Scalar,
              B: Booster<T>,
              W: WeakLearner<T>,
    {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );
        if let Some(info) = self.booster.info() {
            print_info(info);
        }

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Weak Learner".bold(),
            self.weak_learner.name().bold().green(),
        );
        if let Some(info) = self.weak_learner.info() {
            print_info(info);
        }
        println!("{:=^FULL_WIDTH$}\n", "".bold());
    }
}

fn print_info(info: Vec<(&str, String)>) {
    let line = info.into_iter()
        .map(|(key, val)| {
            format!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                key,
                val.bold().yellow(),
                width = STAT_WIDTH - 8,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    println!("{line}");
}

fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{millisec:0>3}s");
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {sec:0>2}.{millisec:0>3}s");
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {min:0>2}m {sec:0>2}s");
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {hours:0>2}h {min:0>2}m")
}
