mod tests {
    use fire_flicker::{FIRE_FLICKER_LEN, Waveform};

    #[test]
    fn test_fire_waveform_shape() {
        let waveform = Waveform::fire();
        assert_eq!(waveform.len(), FIRE_FLICKER_LEN);
        assert_eq!(waveform.len(), 1024);
        assert!(!waveform.is_empty());
        assert_eq!(waveform.sample(0), 0x5EA);
        assert_eq!(waveform.sample(FIRE_FLICKER_LEN - 1), 0x703);
    }

    #[test]
    fn test_fire_waveform_fits_13_bit_duty() {
        let samples = Waveform::fire().samples();
        assert!(samples.iter().all(|&sample| sample > 0 && sample < 1 << 13));
    }

    #[test]
    fn test_custom_waveform() {
        let table: [u16; 2] = [7, 9];
        let waveform = Waveform::new(&table);
        assert_eq!(waveform.len(), 2);
        assert_eq!(waveform.sample(1), 9);
    }
}
