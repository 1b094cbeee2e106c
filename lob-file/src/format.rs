const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const KIB: f64 = 1024.0;

pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    while exponent < UNITS.len() - 1 && bytes >= 1024_u64.pow(exponent as u32 + 1) {
        exponent += 1;
    }

    let value = bytes as f64 / KIB.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", rounded, UNITS[exponent])
}

pub fn format_speed(bytes_per_second: f64) -> String {
    if bytes_per_second < KIB {
        format!("{:.0} B/s", bytes_per_second)
    } else if bytes_per_second < KIB * KIB {
        format!("{:.1} KB/s", bytes_per_second / KIB)
    } else {
        format!("{:.1} MB/s", bytes_per_second / (KIB * KIB))
    }
}

pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        return format!("{}s", seconds.ceil());
    }

    let minutes = (seconds / 60.0).floor();
    let remaining = (seconds % 60.0).ceil();

    format!("{}m {}s", minutes, remaining)
}
