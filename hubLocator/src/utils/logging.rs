use lazy_static::lazy_static;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{EnvFilter, filter::Directive, prelude::*};
use tracing_timing::{Builder, Histogram};
use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use std::time::{Duration, Instant};
use std::cell::RefCell;

const DEFAULT_DIRECTIVES: &str = "warn,windhub=warn";

// Upper bound of one hour, in nanoseconds
const HISTOGRAM_MAX_NS: u64 = 3_600_000_000_000;

// Define categories for different types of operations
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum OperationCategory {
    InputParsing {
        subcategory: InputParsingType,
    },
    Placement {
        subcategory: PlacementType,
    },
    FileIO {
        subcategory: FileIOType,
    },
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum InputParsingType {
    TokenStream,
    Csv,
    Validation,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum PlacementType {
    MedianSearch,
    CostEvaluation,
    Orchestration,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum FileIOType {
    InputRead,
    BreakdownExport,
    ReportSave,
}

impl OperationCategory {
    pub fn as_str(&self) -> String {
        match self {
            OperationCategory::InputParsing { subcategory } => {
                format!("Input Parsing - {}", match subcategory {
                    InputParsingType::TokenStream => "Token Stream",
                    InputParsingType::Csv => "CSV",
                    InputParsingType::Validation => "Validation",
                })
            },
            OperationCategory::Placement { subcategory } => {
                format!("Placement - {}", match subcategory {
                    PlacementType::MedianSearch => "Median Search",
                    PlacementType::CostEvaluation => "Cost Evaluation",
                    PlacementType::Orchestration => "Orchestration",
                })
            },
            OperationCategory::FileIO { subcategory } => {
                format!("File I/O - {}", match subcategory {
                    FileIOType::InputRead => "Input Read",
                    FileIOType::BreakdownExport => "Breakdown Export",
                    FileIOType::ReportSave => "Report Save",
                })
            },
        }
    }
}

thread_local! {
    static TIMING_STACK: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

lazy_static! {
    static ref TIMING_ENABLED: AtomicBool = AtomicBool::new(false);
    static ref FUNCTION_TIMINGS: Arc<RwLock<HashMap<String, Histogram<u64>>>> = Arc::new(RwLock::new(HashMap::new()));
    static ref CATEGORY_TIMINGS: Arc<RwLock<HashMap<OperationCategory, Histogram<u64>>>> = Arc::new(RwLock::new(HashMap::new()));
    static ref HIERARCHICAL_TIMINGS: Arc<RwLock<HashMap<String, (Duration, usize, Vec<String>)>>> = Arc::new(RwLock::new(HashMap::new()));
}

pub struct TimingGuard {
    function_name: String,
    category: OperationCategory,
    start: Instant,
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        record_timing_end(&self.function_name, duration, &self.category);
    }
}

/// Starts a scoped timer; the measurement is recorded when the guard drops.
pub fn start_timing(function_name: &str, category: OperationCategory) -> TimingGuard {
    TIMING_STACK.with(|stack| {
        stack.borrow_mut().push(function_name.to_string());
    });

    TimingGuard {
        function_name: function_name.to_string(),
        category,
        start: Instant::now(),
    }
}

fn new_histogram() -> Option<Histogram<u64>> {
    Histogram::<u64>::new_with_bounds(1, HISTOGRAM_MAX_NS, 3).ok()
}

fn record_timing_end(function_name: &str, duration: Duration, category: &OperationCategory) {
    // Keep the stack balanced whether or not timing is on
    let parent = TIMING_STACK.with(|stack| {
        let mut stack = stack.borrow_mut();
        stack.pop();
        stack.last().cloned()
    });

    if !is_timing_enabled() {
        return;
    }

    let duration_ns = (duration.as_nanos() as u64).clamp(1, HISTOGRAM_MAX_NS);

    {
        let mut hierarchical = HIERARCHICAL_TIMINGS.write();
        let entry = hierarchical
            .entry(function_name.to_string())
            .or_insert((Duration::from_nanos(0), 0, Vec::new()));

        entry.0 += duration;
        entry.1 += 1;

        if let Some(parent_name) = parent {
            if !entry.2.contains(&parent_name) {
                entry.2.push(parent_name);
            }
        }
    }

    {
        let mut timings = FUNCTION_TIMINGS.write();
        if !timings.contains_key(function_name) {
            if let Some(histogram) = new_histogram() {
                timings.insert(function_name.to_string(), histogram);
            }
        }
        if let Some(histogram) = timings.get_mut(function_name) {
            let _ = histogram.record(duration_ns);
        }
    }

    {
        let mut category_timings = CATEGORY_TIMINGS.write();
        if !category_timings.contains_key(category) {
            if let Some(histogram) = new_histogram() {
                category_timings.insert(category.clone(), histogram);
            }
        }
        if let Some(histogram) = category_timings.get_mut(category) {
            let _ = histogram.record(duration_ns);
        }
    }
}

/// `RUST_LOG` wins when set and valid; otherwise only warnings are shown.
/// `--debug-logging` raises this crate to DEBUG on top of either.
fn build_env_filter(rust_log: Option<&str>, debug_logging: bool) -> EnvFilter {
    let env_filter = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES));

    if !debug_logging {
        return env_filter;
    }

    match "windhub=debug".parse::<Directive>() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter,
    }
}

/// Installs the global subscriber. Output goes to stderr; stdout carries only the result.
pub fn init_logging(enable_timing: bool, debug_logging: bool) {
    TIMING_ENABLED.store(enable_timing, Ordering::SeqCst);

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_env_filter(rust_log.as_deref(), debug_logging);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if enable_timing {
        let timing_layer = Builder::default().layer(|| {
            Histogram::<u64>::new_with_bounds(1, HISTOGRAM_MAX_NS, 3)
                .expect("histogram bounds are valid constants")
        });

        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(timing_layer.boxed());

        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer);

        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(e) = result {
        eprintln!("Logging already initialised: {}", e);
    }
}

pub fn is_timing_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::SeqCst)
}

pub fn print_timing_report() {
    if !is_timing_enabled() {
        return;
    }

    eprintln!("\nDetailed Performance Report");
    eprintln!("==========================");

    eprintln!("\nHierarchical Timing Analysis:");
    eprintln!("---------------------------");
    let hierarchical = HIERARCHICAL_TIMINGS.read();
    let mut entries: Vec<_> = hierarchical.iter().collect();
    entries.sort_by(|a, b| b.1.0.cmp(&a.1.0));

    for (function_name, (total_duration, count, parents)) in entries {
        let avg_duration = total_duration.div_f64(*count as f64);
        eprintln!(
            "{}: total={:.3}ms, count={}, avg={:.3}ms{}",
            function_name,
            total_duration.as_secs_f64() * 1000.0,
            count,
            avg_duration.as_secs_f64() * 1000.0,
            if !parents.is_empty() {
                format!("\n  Called by: {}", parents.join(", "))
            } else {
                String::new()
            }
        );
    }

    eprintln!("\nPerformance by Category:");
    eprintln!("------------------------");
    let category_timings = CATEGORY_TIMINGS.read();
    let mut category_vec: Vec<_> = category_timings.iter().collect();
    category_vec.sort_by(|a, b| {
        b.1.mean().partial_cmp(&a.1.mean()).unwrap_or(std::cmp::Ordering::Equal)
    });

    let total_time: f64 = category_vec.iter()
        .map(|(_, hist)| hist.mean() * (hist.len() as f64))
        .sum();

    for (category, histogram) in category_vec {
        let category_total = histogram.mean() * (histogram.len() as f64);
        let percentage = if total_time > 0.0 { (category_total / total_time) * 100.0 } else { 0.0 };
        eprintln!(
            "{}: {:.1}% of total time\n  mean={:.3}ms, p95={:.3}ms, p99={:.3}ms, count={}",
            category.as_str(),
            percentage,
            histogram.mean() / 1_000_000.0,
            histogram.value_at_quantile(0.95) as f64 / 1_000_000.0,
            histogram.value_at_quantile(0.99) as f64 / 1_000_000.0,
            histogram.len(),
        );
    }

    eprintln!("==========================\n");
}
