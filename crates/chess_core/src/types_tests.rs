use super::*;

#[test]
fn test_coordinate_algebraic_roundtrip_corners() {
    assert_eq!(Coordinate::from_algebraic("a1"), Some(Coordinate::new(0, 0)));
    assert_eq!(Coordinate::from_algebraic("h8"), Some(Coordinate::new(7, 7)));
    assert_eq!(Coordinate::new(4, 3).to_string(), "e4");
}

#[test]
fn test_coordinate_rejects_garbage() {
    assert_eq!(Coordinate::from_algebraic("i1"), None);
    assert_eq!(Coordinate::from_algebraic("a9"), None);
    assert_eq!(Coordinate::from_algebraic("e"), None);
}

#[test]
fn test_coordinate_bounds() {
    assert!(Coordinate::new(0, 7).is_on_board());
    assert!(!Coordinate::new(-1, 3).is_on_board());
    assert!(!Coordinate::new(3, 8).is_on_board());
    assert_eq!(Coordinate::new(8, 0).index(), None);
    assert_eq!(Coordinate::from_index(63), Coordinate::new(7, 7));
}

#[test]
fn test_alliance_geometry_is_mirrored() {
    assert_eq!(Alliance::White.direction(), -Alliance::Black.direction());
    assert_eq!(Alliance::White.promotion_rank(), Alliance::Black.home_rank());
    assert_eq!(Alliance::Black.opposite(), Alliance::White);
}
