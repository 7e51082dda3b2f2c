/** Reverse the bit order of a byte: bit 0 ends up as bit 7 and so on.

The two multiplies spread the byte across a 64-bit word so that each bit
lands next to its mirrored slot, the masks pick out the mirrored bits, and
the final multiply folds them into bits 16..24. */
pub fn reverse_byte(b: u8) -> u8 {
    let b = b as u64;
    let t = (b * 0x0802 & 0x22110) | (b * 0x8020 & 0x88440);
    (t * 0x10101 >> 16) as u8
}

/** Bit-reverse every byte of a packed pixel buffer.

The panel scans each byte least-significant-bit first, so a frame packed
most-significant-bit first has to be flipped byte by byte before it goes
out on the display channel. Byte order is preserved. */
pub fn reverse_bits(buf: &[u8]) -> Vec<u8> {
    return buf.iter().map(|&b| reverse_byte(b)).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reverse_reference(b: u8) -> u8 {
        let mut out = 0u8;
        for bit in 0..8 {
            if b & (1 << bit) != 0 {
                out |= 0x80 >> bit;
            }
        }
        out
    }

    #[test]
    fn matches_reference_for_every_byte() {
        for b in 0..=255u8 {
            assert_eq!(reverse_byte(b), reverse_reference(b), "byte {b:#04x}");
        }
    }

    #[test]
    fn is_an_involution() {
        for b in 0..=255u8 {
            assert_eq!(reverse_byte(reverse_byte(b)), b);
        }
    }

    #[test]
    fn spot_values() {
        assert_eq!(reverse_byte(0x00), 0x00);
        assert_eq!(reverse_byte(0xFF), 0xFF);
        assert_eq!(reverse_byte(0x01), 0x80);
        assert_eq!(reverse_byte(0x80), 0x01);
        assert_eq!(reverse_byte(0xF0), 0x0F);
        assert_eq!(reverse_byte(0xA5), 0xA5);
        assert_eq!(reverse_byte(0x18), 0x18);
        assert_eq!(reverse_byte(0x02), 0x40);
    }

    #[test]
    fn buffer_keeps_byte_order() {
        assert_eq!(
            reverse_bits(&[0x01, 0x80, 0xFF, 0x00]),
            vec![0x80, 0x01, 0xFF, 0x00]
        );
    }

    #[test]
    fn buffer_length_is_preserved() {
        assert!(reverse_bits(&[]).is_empty());
        assert_eq!(reverse_bits(&[0xC3; 2400]).len(), 2400);
    }
}
