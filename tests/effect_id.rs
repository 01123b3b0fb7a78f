mod tests {
    use flagstrip::{EFFECT_COUNT, EffectId, PALETTES};

    #[test]
    fn test_effect_count_matches_ids() {
        assert_eq!(EFFECT_COUNT, 4);
        assert_eq!(EffectId::ALL.len(), EFFECT_COUNT);
        for (index, id) in EffectId::ALL.iter().enumerate() {
            assert_eq!(id.index(), index);
            assert_eq!(EffectId::from_index(index), Some(*id));
        }
    }

    #[test]
    fn test_effect_id_from_raw() {
        assert_eq!(EffectId::from_raw(0), Some(EffectId::Spectrum));
        assert_eq!(EffectId::from_raw(3), Some(EffectId::FlagScroll));
        assert_eq!(EffectId::from_raw(4), None);
        assert_eq!(EffectId::from_index(usize::MAX), None);
    }

    #[test]
    fn test_effect_id_names() {
        for id in EffectId::ALL {
            assert_eq!(EffectId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(EffectId::Sweep.as_str(), "sweep");
        assert_eq!(EffectId::parse_from_str("aurora"), None);
    }

    #[test]
    fn test_effect_id_next_wraps() {
        assert_eq!(EffectId::Spectrum.next(), EffectId::SingleHue);
        assert_eq!(EffectId::Sweep.next(), EffectId::FlagScroll);
        assert_eq!(EffectId::FlagScroll.next(), EffectId::Spectrum);
    }

    #[test]
    fn test_effect_slot_keeps_id() {
        for id in EffectId::ALL {
            assert_eq!(id.to_slot(&PALETTES).id(), id);
        }
    }
}
