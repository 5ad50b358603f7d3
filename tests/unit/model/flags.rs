use super::*;

#[test]
fn container_constants_match_classic_encoding() {
    assert_eq!(Contain::row().to_flags().bits(), 0x002);
    assert_eq!(Contain::column().to_flags().bits(), 0x003);
    assert_eq!(Contain::layout().to_flags().bits(), 0x000);
    assert_eq!(Contain::row().with_wrap().to_flags().bits(), 0x006);
    assert_eq!(
        Contain::column()
            .with_justify(Justify::Justify)
            .to_flags()
            .bits(),
        0x01b
    );
    assert_eq!(ItemFlags::ROW, ItemFlags::FLEX);
}

#[test]
fn container_bits_decode_to_typed_fields() {
    let c = Contain::from_bits(0x002 | 0x004 | 0x010).unwrap();
    assert_eq!(c.model, BoxModel::Flex);
    assert_eq!(c.direction, Direction::Row);
    assert!(c.wrap);
    assert_eq!(c.justify, Justify::End);

    // Direction bit without the flex bit is still the free layout model.
    let c = Contain::from_bits(0x001).unwrap();
    assert_eq!(c.flex_direction(), None);
    assert_eq!(c.to_flags().bits(), 0x001);

    for bits in 0..=0x1f {
        assert_eq!(Contain::from_bits(bits).unwrap().to_flags().bits(), bits);
    }
}

#[test]
fn container_bits_outside_mask_are_rejected() {
    let err = Contain::from_bits(ItemFlags::LEFT.bits()).unwrap_err();
    assert!(matches!(err, LayoutError::FlagMask { what: "container", .. }));
}

#[test]
fn behavior_constants_match_classic_encoding() {
    assert_eq!(Behave::fill().to_flags(), ItemFlags::FILL);
    assert_eq!(Behave::fill().to_flags().bits(), 0x1e0);
    assert_eq!(Behave::hfill().to_flags().bits(), 0x0a0);
    assert_eq!(Behave::vfill().to_flags().bits(), 0x140);
    assert_eq!(Behave::center().to_flags().bits(), 0);
    assert_eq!(Behave::top_left().to_flags().bits(), 0x060);
    assert_eq!(Behave::center().with_break().to_flags().bits(), 0x200);
    assert_eq!(
        Behave::new(Anchor::End, Anchor::End).to_flags(),
        ItemFlags::RIGHT | ItemFlags::BOTTOM
    );
}

#[test]
fn behavior_bits_decode_per_axis() {
    let b = Behave::from_bits(0x020 | 0x100 | 0x200).unwrap();
    assert_eq!(b.anchor(Axis::Horizontal), Anchor::Start);
    assert_eq!(b.anchor(Axis::Vertical), Anchor::End);
    assert!(b.line_break);

    let b = Behave::from_bits(0x140).unwrap();
    assert!(b.fills(Axis::Vertical));
    assert!(!b.fills(Axis::Horizontal));

    for bits in (0..=0x3e0).step_by(0x20) {
        assert_eq!(Behave::from_bits(bits).unwrap().to_flags().bits(), bits);
    }
}

#[test]
fn behavior_bits_outside_mask_are_rejected() {
    let err = Behave::from_bits(ItemFlags::ROW.bits()).unwrap_err();
    assert!(matches!(err, LayoutError::FlagMask { what: "behavior", .. }));
    assert!(Behave::from_bits(ItemFlags::INSERTED.bits()).is_err());
}
