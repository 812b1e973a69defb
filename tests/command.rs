mod tests {
    use fire_flicker::Command;

    #[test]
    fn test_command_default_is_none() {
        assert_eq!(Command::default(), Command::None);
        assert!(!Command::None.is_some());
        assert!(Command::On.is_some());
        assert!(Command::Off.is_some());
    }

    #[test]
    fn test_command_from_raw() {
        assert_eq!(Command::from_raw(0), Some(Command::None));
        assert_eq!(Command::from_raw(1), Some(Command::On));
        assert_eq!(Command::from_raw(2), Some(Command::Off));
        assert_eq!(Command::from_raw(3), None);
    }

    #[test]
    fn test_command_parse_from_str() {
        assert_eq!(Command::parse_from_str("on"), Some(Command::On));
        assert_eq!(Command::parse_from_str(" OFF\n"), Some(Command::Off));
        assert_eq!(Command::parse_from_str("None"), Some(Command::None));
        assert_eq!(Command::parse_from_str("toggle"), None);
        assert_eq!(Command::parse_from_str(""), None);
    }

    #[test]
    fn test_command_as_str() {
        assert_eq!(Command::On.as_str(), "on");
        assert_eq!(Command::Off.as_str(), "off");
        assert_eq!(Command::None.as_str(), "none");
    }
}
