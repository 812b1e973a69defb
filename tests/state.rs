mod tests {
    use fire_flicker::{
        AnimationState, CHANNEL_COUNT, Command, DEFAULT_FRAME_DURATION, Duration, FireConfig,
        StateMachine, Transition,
    };

    #[test]
    fn test_state_none_never_transitions() {
        let mut machine = StateMachine::new(3);
        assert_eq!(machine.apply(Command::None), None);
        assert_eq!(machine.state(), AnimationState::On);

        machine.apply(Command::Off);
        assert_eq!(machine.apply(Command::None), None);
        assert_eq!(machine.state(), AnimationState::Off);
    }

    #[test]
    fn test_state_on_off_transitions() {
        let mut machine = StateMachine::new(3);
        assert_eq!(machine.apply(Command::On), None);
        assert_eq!(machine.apply(Command::Off), Some(Transition::PoweredOff));
        assert_eq!(machine.countdown(), 3);
        assert_eq!(machine.apply(Command::On), Some(Transition::PoweredOn));
        assert!(machine.is_on());
    }

    #[test]
    fn test_state_repeated_off_keeps_countdown() {
        let mut machine = StateMachine::new(5);
        machine.apply(Command::Off);
        machine.tick_countdown();
        machine.tick_countdown();
        assert_eq!(machine.countdown(), 3);

        assert_eq!(machine.apply(Command::Off), None);
        assert_eq!(machine.countdown(), 3);
    }

    #[test]
    fn test_state_countdown_resumes() {
        let mut machine = StateMachine::new(3);
        machine.apply(Command::Off);

        assert!(!machine.tick_countdown());
        assert!(!machine.tick_countdown());
        assert!(machine.tick_countdown());
        assert_eq!(machine.state(), AnimationState::On);
        assert_eq!(machine.countdown(), 0);

        // Counting down is a no-op while on
        assert!(!machine.tick_countdown());
    }

    #[test]
    fn test_state_off_restarts_countdown() {
        let mut machine = StateMachine::new(2);
        machine.apply(Command::Off);
        machine.tick_countdown();
        machine.tick_countdown();
        assert!(machine.is_on());

        machine.apply(Command::Off);
        assert_eq!(machine.countdown(), 2);
    }

    #[test]
    fn test_transition_is_on() {
        assert!(Transition::PoweredOn.is_on());
        assert!(Transition::Resumed.is_on());
        assert!(!Transition::PoweredOff.is_on());
    }

    #[test]
    fn test_config_default_countdown() {
        let config: FireConfig<CHANNEL_COUNT> = FireConfig::default();
        assert_eq!(config.frame_duration, DEFAULT_FRAME_DURATION);
        // 60 s at 33 ms per frame
        assert_eq!(config.countdown_ticks(), 1818);
    }

    #[test]
    fn test_config_countdown_is_at_least_one_frame() {
        let config = FireConfig {
            frame_duration: Duration::from_millis(33),
            power_off_duration: Duration::from_millis(10),
            offsets: [0, 1],
        };
        assert_eq!(config.countdown_ticks(), 1);
    }
}
