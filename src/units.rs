//! Binary size units for thresholds and human-readable output.

/// A binary size unit (1024-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// 1024³ bytes.
    Gigabyte,
    /// 1024² bytes.
    Megabyte,
    /// 1024 bytes.
    Kilobyte,
    /// A single byte.
    Byte,
}

impl Unit {
    /// Number of bytes in one of this unit.
    pub fn bytes(self) -> u64 {
        match self {
            Unit::Gigabyte => 1 << 30,
            Unit::Megabyte => 1 << 20,
            Unit::Kilobyte => 1 << 10,
            Unit::Byte => 1,
        }
    }

    /// Short suffix used in output lines and `-size` flag values.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Gigabyte => "GB",
            Unit::Megabyte => "MB",
            Unit::Kilobyte => "KB",
            Unit::Byte => "B",
        }
    }

    /// The largest unit that fits at least once into `size` bytes.
    ///
    /// `for_bytes(0)` and anything below 1024 scale to [`Unit::Byte`].
    pub fn for_bytes(size: u64) -> Unit {
        if size >= Unit::Gigabyte.bytes() {
            Unit::Gigabyte
        } else if size >= Unit::Megabyte.bytes() {
            Unit::Megabyte
        } else if size >= Unit::Kilobyte.bytes() {
            Unit::Kilobyte
        } else {
            Unit::Byte
        }
    }

    /// Parse a flag suffix (`GB`/`MB`/`KB`, case-insensitive). A missing
    /// suffix means plain bytes.
    pub fn from_suffix(suffix: &str) -> Option<Unit> {
        if suffix.is_empty() || suffix.eq_ignore_ascii_case("B") {
            Some(Unit::Byte)
        } else if suffix.eq_ignore_ascii_case("KB") {
            Some(Unit::Kilobyte)
        } else if suffix.eq_ignore_ascii_case("MB") {
            Some(Unit::Megabyte)
        } else if suffix.eq_ignore_ascii_case("GB") {
            Some(Unit::Gigabyte)
        } else {
            None
        }
    }
}

/// Render a byte count scaled to its largest whole unit, two decimals:
/// `1310720` → `"1.25 MB"`.
pub fn format_size(size: u64) -> String {
    let unit = Unit::for_bytes(size);
    format!("{:.2} {}", size as f64 / unit.bytes() as f64, unit.suffix())
}
