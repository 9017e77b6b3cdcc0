//! Property-based tests for fingerprint determinism and distinctness.

use cimcache::Fingerprint;
use proptest::prelude::*;

proptest! {
    /// Same field sequence, same digest, always.
    #[test]
    fn fingerprint_is_deterministic(fields in proptest::collection::vec(".*", 0..6)) {
        let refs: Vec<&str> = fields.iter().map(String::as_str).collect();
        prop_assert_eq!(Fingerprint::of(&refs), Fingerprint::of(&refs));
    }

    /// Distinct concatenated inputs do not collide. Fields hash back to
    /// back, so distinctness is a property of the concatenation, not of
    /// the field split.
    #[test]
    fn distinct_requests_do_not_collide(
        a in "[A-Za-z0-9\\\\.:=@' ]{1,60}",
        b in "[A-Za-z0-9\\\\.:=@' ]{1,60}",
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(Fingerprint::of(&[&a]), Fingerprint::of(&[&b]));
    }

    /// Splitting the same concatenation differently yields the same key;
    /// the write path relies on this to pre-seed what the read computes.
    #[test]
    fn split_point_does_not_affect_digest(s in "[A-Za-z0-9\\\\.:]{2,40}", split in 1usize..40) {
        let split = split.min(s.len() - 1);
        if s.is_char_boundary(split) {
            let (head, tail) = s.split_at(split);
            prop_assert_eq!(Fingerprint::of(&[head, tail]), Fingerprint::of(&[&s]));
        }
    }
}
