//! Property tests for checksums and path encoding

use dyplayer_protocol::frame::{encode_path, expanded_path_len, MAX_BODY_SIZE};
use dyplayer_protocol::{checksum, validate_checksum, CommandId, Device, RunningChecksum};
use proptest::prelude::*;

proptest! {
    #[test]
    fn checksum_ignores_byte_order(
        (data, shuffled) in proptest::collection::vec(any::<u8>(), 0..64)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(checksum(&shuffled), checksum(&data));
    }

    #[test]
    fn appended_checksum_validates(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut frame = data.clone();
        frame.push(checksum(&data));
        prop_assert!(validate_checksum(&frame));
    }

    #[test]
    fn mutated_body_fails_validation(
        data in proptest::collection::vec(any::<u8>(), 1..64),
        index in any::<prop::sample::Index>(),
        delta in 1u8..=255,
    ) {
        let mut frame = data.clone();
        frame.push(checksum(&data));

        // Any nonzero change to a single byte shifts the sum by that delta
        let i = index.index(data.len());
        frame[i] = frame[i].wrapping_add(delta);
        prop_assert!(!validate_checksum(&frame));
    }

    #[test]
    fn running_checksum_equals_whole(chunks in proptest::collection::vec(
        proptest::collection::vec(any::<u8>(), 0..8), 0..16)
    ) {
        let mut running = RunningChecksum::new();
        let mut whole = Vec::new();
        for chunk in &chunks {
            running.update(chunk);
            whole.extend_from_slice(chunk);
        }
        prop_assert_eq!(running.value(), checksum(&whole));
    }

    #[test]
    fn encoded_path_layout(path in "/[a-zA-Z0-9_./]{0,39}") {
        let body = encode_path(CommandId::PlaySpecifiedPath, Device::Usb, &path, 40).unwrap();
        let expanded = expanded_path_len(path.as_bytes());

        prop_assert!(body.len() <= MAX_BODY_SIZE);
        prop_assert_eq!(body.len(), 4 + expanded);
        prop_assert_eq!(body[2] as usize, expanded + 1);

        let payload = &body[4..];
        prop_assert!(!payload.contains(&b'.'));
        prop_assert!(!payload.iter().any(|b| b.is_ascii_lowercase()));
        // Every separator after the root one is marked
        for (i, &byte) in payload.iter().enumerate().skip(1) {
            if byte == b'/' {
                prop_assert_eq!(payload[i - 1], b'*');
            }
        }
    }
}
