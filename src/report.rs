// src/report.rs
use crate::error::ProbeError;

pub const TROUBLESHOOTING_TIPS: [&str; 3] = [
    "1. Make sure MongoDB is running locally: mongod",
    "2. Or use MongoDB Atlas cloud database",
    "3. Check your MONGODB_URI in .env file",
];

pub fn error_line(err: &ProbeError) -> String {
    format!("❌ Database connection failed: {}", err)
}

/// Lines printed to stdout after the error line.
pub fn troubleshooting_lines() -> Vec<String> {
    let mut lines = vec![String::new(), "💡 Troubleshooting tips:".to_string()];
    lines.extend(TROUBLESHOOTING_TIPS.iter().map(|tip| tip.to_string()));
    lines
}

pub fn print_failure(err: &ProbeError) {
    eprintln!("{}", error_line(err));
    for line in troubleshooting_lines() {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_line_carries_message() {
        let err: ProbeError = bson::to_document(&42_i32).unwrap_err().into();
        let line = error_line(&err);
        assert!(line.starts_with("❌ Database connection failed: "));
        assert!(line.ends_with(&err.to_string()));
    }

    #[test]
    fn tips_follow_blank_line_and_heading() {
        let lines = troubleshooting_lines();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "💡 Troubleshooting tips:");
        assert_eq!(&lines[2..], &TROUBLESHOOTING_TIPS.map(String::from));
    }
}
