use simple_vector::{simple_vector, SimpleVector};

#[test]
fn test_insert_into_filled_vector() {
    let mut vector = SimpleVector::from_elem(3, 'x');
    let inserted = vector.insert(vector.begin() + 1, 'y');
    assert_eq!(*inserted, 'y');

    assert_eq!(vector, ['x', 'y', 'x', 'x']);
    assert_eq!(vector.size(), 4);
    assert_eq!(vector.capacity(), 6);
}

#[test]
fn test_insert_at_begin() {
    let mut vector = SimpleVector::with_capacity(4);
    vector.extend([2, 3]);

    vector.insert(vector.begin(), 1);
    assert_eq!(vector, [1, 2, 3]);
    assert_eq!(vector.capacity(), 4);
}

#[test]
fn test_insert_at_end_matches_push_back() {
    let mut inserted = SimpleVector::with_capacity(4);
    inserted.extend([1, 2]);
    let mut pushed = inserted.clone();

    inserted.insert(inserted.end(), 3);
    pushed.push_back(3);

    assert_eq!(inserted, pushed);
    assert_eq!(inserted.capacity(), pushed.capacity());
}

#[test]
fn test_insert_at_end_of_full_vector() {
    let mut vector = simple_vector![1, 2];
    vector.insert(vector.end(), 3);

    assert_eq!(vector, [1, 2, 3]);
    assert_eq!(vector.capacity(), 4);
}

#[test]
fn test_insert_at_begin_of_full_vector() {
    let mut vector = simple_vector![2, 3, 4];
    vector.insert(vector.begin(), 1);

    assert_eq!(vector, [1, 2, 3, 4]);
    assert_eq!(vector.capacity(), 6);
}

#[test]
fn test_insert_into_empty_vector_allocates_one() {
    let mut vector = SimpleVector::new();
    vector.insert(vector.begin(), "only");

    assert_eq!(vector, ["only"]);
    assert_eq!(vector.capacity(), 1);
}

#[test]
fn test_insert_returns_mutable_reference() {
    let mut vector = simple_vector![1, 3];
    *vector.insert(1, 0) = 2;
    assert_eq!(vector, [1, 2, 3]);
}

#[test]
fn test_insert_overwrites_slack() {
    let mut vector = simple_vector![1, 2, 3];
    vector.pop_back();
    vector.insert(0, 0);

    assert_eq!(vector, [0, 1, 2]);
    assert_eq!(vector.capacity(), 3);
}

#[test]
fn test_erase_middle() {
    let mut vector = simple_vector![10, 20, 30];
    let next = vector.erase(vector.begin() + 1);

    assert_eq!(vector, [10, 30]);
    assert_eq!(vector.size(), 2);
    assert_eq!(vector.capacity(), 3);
    assert_eq!(vector[next], 30);
}

#[test]
fn test_erase_begin() {
    let mut vector = simple_vector!['a', 'b', 'c'];
    vector.erase(vector.begin());
    assert_eq!(vector, ['b', 'c']);
}

#[test]
fn test_erase_last_returns_end() {
    let mut vector = simple_vector!['a', 'b', 'c'];
    let next = vector.erase(vector.end() - 1);

    assert_eq!(vector, ['a', 'b']);
    assert_eq!(next, vector.end());
}

#[test]
fn test_erase_only_element() {
    let mut vector = simple_vector![String::from("gone")];
    vector.erase(0);

    assert!(vector.is_empty());
    assert_eq!(vector.capacity(), 1);
}

#[test]
fn test_try_erase_succeeds_in_range() {
    let mut vector = simple_vector![1, 2, 3];
    assert_eq!(vector.try_erase(0), Ok(0));
    assert_eq!(vector, [2, 3]);
}

#[test]
fn test_try_insert_grows_and_returns_element() {
    let mut vector: SimpleVector<u16> = SimpleVector::new();
    assert_eq!(vector.try_insert(0, 7).map(|value| *value), Ok(7));
    assert_eq!(vector.capacity(), 1);
}
