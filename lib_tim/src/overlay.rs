use log::debug;

/// Classifies a front-layer pixel index into one of its four sub-colours.
/// Indices cycle through the table: 0, 4, 8 and 12 share sub-colour 0;
/// 1, 5, 9 and 13 share sub-colour 1; and so on.
fn front_slot(index: u8) -> u8 {
    index % 4
}

/// Classifies a back-layer pixel index into one of its four sub-colours.
/// Indices run in contiguous blocks: 0-3 map to sub-colour 0, 4-7 to 1,
/// 8-11 to 2, 12-15 to 3.
fn back_slot(index: u8) -> u8 {
    index / 4
}

/// Combines one pixel index from each layer into a single index that
/// selects both sub-colours at once: the front slot occupies the low two
/// bits, the back slot the high two. Only the low four bits of each input
/// are used.
///
/// # Returns
/// A value in `0..=15`, valid as a packed 4bpp index.
pub fn combine_index(front: u8, back: u8) -> u8 {
    front_slot(front & 0x0F) + 4 * back_slot(back & 0x0F)
}

/// Combines two packed pixel bytes, high and low nibble independently.
pub fn combine_byte(front: u8, back: u8) -> u8 {
    let hi = combine_index(front >> 4, back >> 4);
    let lo = combine_index(front & 0x0F, back & 0x0F);
    (hi << 4) | lo
}

/// Combines two equal-length pixel buffers element-wise.
pub fn combine(front: &[u8], back: &[u8]) -> Vec<u8> {
    debug_assert_eq!(front.len(), back.len());
    debug!("combining {} pixel bytes", front.len());

    front
        .iter()
        .zip(back)
        .map(|(&f, &b)| combine_byte(f, b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_classification() {
        for index in 0u8..16 {
            assert_eq!(front_slot(index), index % 4);

            let expected = match index {
                0..=3 => 0,
                4..=7 => 1,
                8..=11 => 2,
                _ => 3,
            };
            assert_eq!(back_slot(index), expected);
        }
    }

    #[test]
    fn test_combined_index_encodes_both_slots() {
        for front in 0u8..16 {
            for back in 0u8..16 {
                let combined = combine_index(front, back);
                assert!(combined < 16);
                assert_eq!(combined % 4, front_slot(front));
                assert_eq!(combined / 4, back_slot(back));
                assert_eq!(combined, front_slot(front) + 4 * back_slot(back));
            }
        }
    }

    #[test]
    fn test_combine_byte_exhaustive() {
        for front in 0u8..=255 {
            for back in 0u8..=255 {
                let combined = combine_byte(front, back);
                assert_eq!(combined, combine_byte(front, back));
                assert_eq!(combined >> 4, combine_index(front >> 4, back >> 4));
                assert_eq!(combined & 0x0F, combine_index(front & 0x0F, back & 0x0F));
            }
        }
    }

    #[test]
    fn test_combine_byte_known_values() {
        // Both layers on index 0 stay on the first sub-colour pair
        assert_eq!(combine_byte(0x00, 0x00), 0x00);
        // Front 0 picks slot 0, back 15 picks slot 3: 0 + 4*3 = 0xC
        assert_eq!(combine_byte(0x00, 0xFF), 0xCC);
        // Front nibbles 0 and 15 pick slots 0 and 3 against back slot 3
        assert_eq!(combine_byte(0x0F, 0xFF), 0xCF);
        // Front slots come from the low two bits only
        assert_eq!(combine_byte(0x48, 0x00), 0x00);
        // Back slots come from the index range only
        assert_eq!(combine_byte(0x00, 0x37), 0x04);
    }

    #[test]
    fn test_combine_buffers() {
        let front = [0x00, 0x0F, 0x48];
        let back = [0x00, 0xFF, 0x37];
        assert_eq!(combine(&front, &back), vec![0x00, 0xCF, 0x04]);
    }
}
