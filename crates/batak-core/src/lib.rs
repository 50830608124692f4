#![deny(warnings)]
pub mod game;
pub mod model;
pub mod rules;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "batak"
    }

    pub const fn codename() -> &'static str {
        "Koz"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::AppInfo;

    #[test]
    fn exposes_static_metadata() {
        assert_eq!(AppInfo::name(), "batak");
        assert_eq!(AppInfo::codename(), "Koz");
        assert!(!AppInfo::version().is_empty());
    }
}
