use super::*;

fn f(n: u32) -> FrameIndex {
    FrameIndex::new(n).unwrap()
}

#[test]
fn reference_table_covers_frames_5_through_19() {
    let table = FramePositionTable::reference();
    assert_eq!(table.len(), 15);
    for n in 1..=20 {
        assert_eq!(table.contains(f(n)), (5..=19).contains(&n), "frame {n}");
    }
}

#[test]
fn reference_table_baselines() {
    let table = FramePositionTable::reference();
    assert_eq!(table.lookup(f(5)), Some(179));
    assert_eq!(table.lookup(f(8)), Some(99));
    assert_eq!(table.lookup(f(14)), Some(105));
    assert_eq!(table.lookup(f(19)), Some(59));
}

#[test]
fn lookup_outside_table_is_none_not_error() {
    let table = FramePositionTable::reference();
    assert_eq!(table.lookup(f(1)), None);
    assert_eq!(table.lookup(f(4)), None);
    assert_eq!(table.lookup(f(20)), None);
}

#[test]
fn from_entries_rejects_frames_outside_sequence() {
    assert!(FramePositionTable::from_entries([(0, 10)]).is_err());
    assert!(FramePositionTable::from_entries([(21, 10)]).is_err());

    let t = FramePositionTable::from_entries([(3, -4), (1, 7)]).unwrap();
    let entries: Vec<_> = t.iter().map(|(f, x)| (f.get(), x)).collect();
    assert_eq!(entries, vec![(1, 7), (3, -4)]);
}

#[test]
fn reference_table_keeps_every_constant_entry() {
    let table = FramePositionTable::reference();
    assert_eq!(table.len(), REFERENCE_POSITIONS.len());
    for (n, x) in REFERENCE_POSITIONS {
        assert_eq!(table.lookup(f(n)), Some(x), "frame {n}");
    }
}
