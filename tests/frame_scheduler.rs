mod tests {
    use fire_flicker::{
        ActuationBackend, Command, CommandChannel, Duration, FireConfig, FireEngine,
        FrameScheduler, Instant, Transition, Waveform,
    };

    const TABLE: [u16; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

    #[derive(Default)]
    struct NullBackend {
        writes: usize,
    }

    impl ActuationBackend for NullBackend {
        type Error = core::convert::Infallible;

        fn set_channel_intensity(&mut self, _channel: usize, _intensity: u16) -> Result<(), Self::Error> {
            self.writes += 1;
            Ok(())
        }
    }

    fn config() -> FireConfig<2> {
        FireConfig {
            frame_duration: Duration::from_millis(33),
            power_off_duration: Duration::from_millis(66),
            offsets: [1, 0],
        }
    }

    #[test]
    fn test_scheduler_uses_absolute_deadlines() {
        let channel = CommandChannel::<4>::new();
        let engine = FireEngine::new(
            NullBackend::default(),
            channel.receiver(),
            Waveform::new(&TABLE),
            &config(),
        )
        .unwrap();
        let mut scheduler = FrameScheduler::new(engine);
        assert_eq!(scheduler.frame_duration(), Duration::from_millis(33));

        let result = scheduler.tick(Instant::from_millis(0)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(33));
        assert_eq!(result.sleep_duration, Duration::from_millis(33));

        // Woke up late: the next deadline stays on the grid
        let result = scheduler.tick(Instant::from_millis(40)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(66));
        assert_eq!(result.sleep_duration, Duration::from_millis(26));

        let result = scheduler.tick(Instant::from_millis(66)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(99));
        assert_eq!(result.sleep_duration, Duration::from_millis(33));
    }

    #[test]
    fn test_scheduler_behind_schedule_does_not_sleep() {
        let channel = CommandChannel::<4>::new();
        let engine = FireEngine::new(
            NullBackend::default(),
            channel.receiver(),
            Waveform::new(&TABLE),
            &config(),
        )
        .unwrap();
        let mut scheduler = FrameScheduler::new(engine);

        scheduler.tick(Instant::from_millis(0)).unwrap();
        let result = scheduler.tick(Instant::from_millis(70)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(66));
        assert_eq!(result.sleep_duration, Duration::from_ticks(0));
    }

    #[test]
    fn test_scheduler_resets_after_stall() {
        let channel = CommandChannel::<4>::new();
        let engine = FireEngine::new(
            NullBackend::default(),
            channel.receiver(),
            Waveform::new(&TABLE),
            &config(),
        )
        .unwrap();
        let mut scheduler = FrameScheduler::new(engine);

        scheduler.tick(Instant::from_millis(0)).unwrap();
        // More than two frames behind: restart the schedule instead of catching up
        let result = scheduler.tick(Instant::from_millis(500)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(533));
        assert_eq!(result.sleep_duration, Duration::from_millis(33));
    }

    #[test]
    fn test_scheduler_runs_one_engine_step_per_tick() {
        let channel = CommandChannel::<4>::new();
        let engine = FireEngine::new(
            NullBackend::default(),
            channel.receiver(),
            Waveform::new(&TABLE),
            &config(),
        )
        .unwrap();
        let mut scheduler = FrameScheduler::new(engine);

        let result = scheduler.tick(Instant::from_millis(0)).unwrap();
        assert!(result.outcome.rendered);
        assert_eq!(scheduler.engine().backend().writes, 2);
        assert_eq!(scheduler.engine().cursors().positions(), &[2, 1]);

        channel.sender().try_send(Command::Off).unwrap();
        let result = scheduler.tick(Instant::from_millis(33)).unwrap();
        assert_eq!(result.outcome.transition, Some(Transition::PoweredOff));

        scheduler.tick(Instant::from_millis(66)).unwrap();
        let result = scheduler.tick(Instant::from_millis(99)).unwrap();
        assert_eq!(result.outcome.transition, Some(Transition::Resumed));

        let result = scheduler.tick(Instant::from_millis(132)).unwrap();
        assert!(result.outcome.rendered);
        // Two rendered frames plus the blanking frame
        assert_eq!(scheduler.engine_mut().backend_mut().writes, 6);
    }
}
