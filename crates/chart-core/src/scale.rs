// File: crates/chart-core/src/scale.rs
// Summary: Time (X) and value (Y) scales built from a record subset, plus tick generation.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, Timelike};

use crate::record::Record;

/// Time coordinate: milliseconds since the Unix epoch.
pub type Millis = f64;
/// Value coordinate: waitlist count.
pub type Value = f64;

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;

/// Linear map of `[d0, d1]` onto `[r0, r1]`; a zero-width domain maps to the
/// range midpoint.
#[inline]
fn interpolate(v: f64, (d0, d1): (f64, f64), (r0, r1): (f64, f64)) -> f64 {
    let span = d1 - d0;
    if span.abs() < 1e-12 {
        return (r0 + r1) * 0.5;
    }
    r0 + (v - d0) / span * (r1 - r0)
}

/// Horizontal scale, linear in elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub domain: (Millis, Millis),
    pub range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (Millis, Millis), range: (f64, f64)) -> Self {
        Self { domain, range }
    }
    #[inline]
    pub fn to_px(&self, t: Millis) -> f64 {
        interpolate(t, self.domain, self.range)
    }
    #[inline]
    pub fn from_px(&self, px: f64) -> Millis {
        interpolate(px, self.range, self.domain)
    }
    /// Roughly `count` ticks on calendar-friendly boundaries.
    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        let (d0, d1) = if self.domain.0 <= self.domain.1 { self.domain } else { (self.domain.1, self.domain.0) };
        time_ticks(d0, d1, count.clamp(1, MAX_TICKS))
    }
}

/// Most ticks either axis asks for, however large the requested count.
pub const MAX_TICKS: usize = 50;

/// Vertical scale; the range is `[plot_height, 0]` so larger counts draw higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub domain: (Value, Value),
    pub range: (f64, f64),
}

impl ValueScale {
    pub fn new(domain: (Value, Value), range: (f64, f64)) -> Self {
        Self { domain, range }
    }
    #[inline]
    pub fn to_px(&self, v: Value) -> f64 {
        interpolate(v, self.domain, self.range)
    }
    #[inline]
    pub fn from_px(&self, py: f64) -> Value {
        interpolate(py, self.range, self.domain)
    }
    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 { self.domain } else { (self.domain.1, self.domain.0) };
        value_ticks(lo, hi, count.clamp(1, MAX_TICKS))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: TimeScale,
    pub y: ValueScale,
}

/// `[min(time), max(time)]` over records with a valid timestamp.
pub fn x_domain<'a, I>(records: I) -> Option<(Millis, Millis)>
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().filter_map(Record::time_ms).fold(None, |acc, t| match acc {
        None => Some((t, t)),
        Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
    })
}

/// `[0, max(0, waitlisted)]` over records with a numeric count; `None` when
/// no record has one.
pub fn y_domain<'a, I>(records: I) -> Option<(Value, Value)>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|r| r.has_value())
        .map(|r| r.waitlisted)
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
        .map(|max| (0.0, max.max(0.0)))
}

/// Scales for a record subset drawn into a `plot_width` x `plot_height` area.
///
/// Returns `None` when no record carries a valid timestamp (including the
/// empty subset); callers skip drawing instead of scaling a garbage extent.
/// A subset with no numeric counts gets the y-domain `[0, 0]`.
pub fn build_scales<'a, I>(subset: I, plot_width: f64, plot_height: f64) -> Option<Scales>
where
    I: IntoIterator<Item = &'a Record>,
    I::IntoIter: Clone,
{
    let it = subset.into_iter();
    let xd = x_domain(it.clone())?;
    let yd = y_domain(it).unwrap_or((0.0, 0.0));
    Some(Scales {
        x: TimeScale::new(xd, (0.0, plot_width)),
        y: ValueScale::new(yd, (plot_height, 0.0)),
    })
}

// ---- ticks ------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq)]
enum TimeStep {
    Fixed(f64),
    Months(u32),
}

impl TimeStep {
    fn approx_ms(&self) -> f64 {
        match *self {
            TimeStep::Fixed(ms) => ms,
            TimeStep::Months(n) => n as f64 * 30.0 * DAY,
        }
    }
}

const TIME_STEPS: [TimeStep; 18] = [
    TimeStep::Fixed(SECOND),
    TimeStep::Fixed(5.0 * SECOND),
    TimeStep::Fixed(15.0 * SECOND),
    TimeStep::Fixed(30.0 * SECOND),
    TimeStep::Fixed(MINUTE),
    TimeStep::Fixed(5.0 * MINUTE),
    TimeStep::Fixed(15.0 * MINUTE),
    TimeStep::Fixed(30.0 * MINUTE),
    TimeStep::Fixed(HOUR),
    TimeStep::Fixed(3.0 * HOUR),
    TimeStep::Fixed(6.0 * HOUR),
    TimeStep::Fixed(12.0 * HOUR),
    TimeStep::Fixed(DAY),
    TimeStep::Fixed(2.0 * DAY),
    TimeStep::Fixed(WEEK),
    TimeStep::Months(1),
    TimeStep::Months(3),
    TimeStep::Months(12),
];

fn pick_time_step(span: f64, count: usize) -> TimeStep {
    let target = count as f64;
    for step in TIME_STEPS {
        if span / step.approx_ms() <= target {
            return step;
        }
    }
    let years = span / TimeStep::Months(12).approx_ms();
    TimeStep::Months(12 * (years / target).ceil().max(1.0) as u32)
}

fn to_datetime(ms: Millis) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms.round() as i64).map(|d| d.naive_utc())
}

fn format_time_tick(t: NaiveDateTime, step: TimeStep) -> String {
    let fmt = match step {
        TimeStep::Fixed(ms) if ms < MINUTE => "%H:%M:%S",
        TimeStep::Fixed(ms) if ms < DAY => {
            if t.hour() == 0 && t.minute() == 0 { "%b %d" } else { "%H:%M" }
        }
        TimeStep::Fixed(_) => "%b %d",
        TimeStep::Months(n) if n >= 12 => "%Y",
        TimeStep::Months(_) => {
            if t.month() == 1 { "%Y" } else { "%b" }
        }
    };
    t.format(fmt).to_string()
}

fn time_ticks(d0: Millis, d1: Millis, count: usize) -> Vec<Tick> {
    let span = d1 - d0;
    if span <= 0.0 {
        return to_datetime(d0)
            .map(|t| vec![Tick { value: d0, label: format_time_tick(t, TimeStep::Fixed(SECOND)) }])
            .unwrap_or_default();
    }
    let step = pick_time_step(span, count);
    let mut out = Vec::new();
    match step {
        TimeStep::Fixed(ms) => {
            let first = (d0 / ms).ceil() as i64;
            let last = (d1 / ms).floor() as i64;
            for i in first..=last {
                let v = i as f64 * ms;
                if let Some(t) = to_datetime(v) {
                    out.push(Tick { value: v, label: format_time_tick(t, step) });
                }
            }
        }
        TimeStep::Months(n) => {
            let Some(start) = to_datetime(d0) else { return out };
            // first aligned month boundary at or after d0
            let month_index = start.year() * 12 + start.month0() as i32;
            let aligned = (month_index as f64 / n as f64).ceil() as i32 * n as i32;
            let first_of_month = |idx: i32| {
                NaiveDate::from_ymd_opt(idx.div_euclid(12), idx.rem_euclid(12) as u32 + 1, 1)
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            };
            let mut cursor = first_of_month(aligned);
            while let Some(t) = cursor {
                let v = t.and_utc().timestamp_millis() as f64;
                if v > d1 {
                    break;
                }
                if v >= d0 {
                    out.push(Tick { value: v, label: format_time_tick(t, step) });
                }
                cursor = t.checked_add_months(Months::new(n));
            }
        }
    }
    out
}

/// 1/2/5 x 10^k step closest to `(hi - lo) / count`.
pub fn tick_increment(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count.max(1) as f64;
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

fn value_ticks(lo: f64, hi: f64, count: usize) -> Vec<Tick> {
    if (hi - lo).abs() < 1e-12 {
        return vec![Tick { value: lo, label: format_value(lo, 1.0) }];
    }
    let step = tick_increment(lo, hi, count);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last)
        .map(|i| {
            let v = i as f64 * step;
            Tick { value: v, label: format_value(v, step) }
        })
        .collect()
}

fn format_value(v: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    format!("{:.*}", decimals, v)
}
