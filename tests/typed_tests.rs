use bytevec::{ByteVec, ByteVecError, TypedVec, ValueContainer};

const VALS: [i32; 6] = [6, 1, 5, 2, 4, 3];

fn vals() -> TypedVec<i32> {
    let mut vector = TypedVec::new().unwrap();
    vector.append_slice(&VALS).unwrap();
    vector
}

#[test]
fn test_typed_new() {
    let vector = TypedVec::<i32>::new().unwrap();

    assert!(vector.is_empty());
    assert_eq!(vector.capacity(), 100);
    assert_eq!(vector.as_byte_vec().element_width(), 4);
}

#[test]
fn test_typed_push_and_access() {
    let mut vector = TypedVec::<i32>::new().unwrap();
    for value in VALS {
        vector.push_back(value).unwrap();
    }

    assert_eq!(vector.back().unwrap(), 3);
    assert_eq!(vector.front().unwrap(), 6);
    assert_eq!(vector.at(2).unwrap(), 5);
    assert_eq!(vector.get(6), None);
    assert_eq!(vector.len(), 6);
}

#[test]
fn test_typed_filled() {
    let vector = TypedVec::filled(6, 4i32).unwrap();

    assert_eq!(vector.len(), 6);
    assert_eq!(vector.capacity(), 13);
    assert!(vector.iter().all(|v| v == 4));
}

#[test]
fn test_typed_insert_and_remove() {
    let mut vector = vals();
    vector.insert_at(10, 3).unwrap();
    assert_eq!(vector.to_vec(), [6, 1, 5, 10, 2, 4, 3]);

    assert_eq!(vector.remove_at(3).unwrap(), 10);
    assert_eq!(vector.to_vec(), VALS);

    assert_eq!(vector.pop_front().unwrap(), 6);
    assert_eq!(vector.pop_back().unwrap(), 3);
    assert_eq!(vector.to_vec(), [1, 5, 2, 4]);
}

#[test]
fn test_typed_push_front() {
    let mut vector = TypedVec::<u16>::new().unwrap();
    vector.push_front(1).unwrap();
    vector.push_front(2).unwrap();
    assert_eq!(vector.to_vec(), [2, 1]);
}

#[test]
fn test_typed_index_of_and_remove() {
    let mut vector = TypedVec::<i64>::new().unwrap();
    vector.append_slice(&[5, -1, 5, 7, 5]).unwrap();

    assert_eq!(vector.index_of(&7), Some(3));
    assert!(vector.contains(&-1));
    assert_eq!(vector.remove(&5), 3);
    assert_eq!(vector.to_vec(), [-1, 7]);
    assert_eq!(vector.index_of(&5), None);
}

#[test]
fn test_typed_sort() {
    let mut vector = vals();
    vector.sort();
    assert_eq!(vector.to_vec(), [1, 2, 3, 4, 5, 6]);

    vector.sort_by(|a, b| b.cmp(a));
    assert_eq!(vector.to_vec(), [6, 5, 4, 3, 2, 1]);
}

#[test]
fn test_typed_sort_floats() {
    let mut vector = TypedVec::<f64>::new().unwrap();
    vector.append_slice(&[2.5, -1.0, 0.25, 10.0]).unwrap();

    vector.sort_by(f64::total_cmp);
    assert_eq!(vector.to_vec(), [-1.0, 0.25, 2.5, 10.0]);
}

#[test]
fn test_typed_reverse_and_iter() {
    let mut vector = vals();
    vector.reverse();

    assert_eq!(vector.iter().collect::<Vec<_>>(), [3, 4, 2, 5, 1, 6]);
    assert_eq!(vector.iter().rev().next(), Some(6));
    assert_eq!(vector.iter().len(), 6);
}

#[test]
fn test_typed_swap() {
    let mut first = vals();
    let mut second = TypedVec::filled(2, 9i32).unwrap();

    first.swap(&mut second);
    assert_eq!(first.to_vec(), [9, 9]);
    assert_eq!(first.capacity(), 5);
    assert_eq!(second.to_vec(), VALS);
    assert_eq!(second.capacity(), 100);
}

#[test]
fn test_typed_copy_to_slice() {
    let vector = vals();
    let mut dest = [0i32; 6];
    vector.copy_to_slice(&mut dest).unwrap();
    assert_eq!(dest, VALS);

    let mut small = [0i32; 2];
    assert_eq!(
        vector.copy_to_slice(&mut small).unwrap_err(),
        ByteVecError::BufferTooSmall {
            required: 24,
            provided: 8
        }
    );
}

#[test]
fn test_typed_reserve_trim_clear() {
    let mut vector = vals();
    vector.reserve(50).unwrap();
    assert_eq!(vector.capacity(), 50);

    vector.truncate(3);
    vector.trim().unwrap();
    assert_eq!(vector.capacity(), 3);
    assert_eq!(vector.to_vec(), [6, 1, 5]);

    vector.clear();
    assert!(vector.is_empty());
    assert_eq!(vector.capacity(), 3);
}

#[test]
fn test_typed_errors() {
    let mut vector = TypedVec::<u32>::new().unwrap();

    assert_eq!(vector.front().unwrap_err(), ByteVecError::EmptyVector);
    assert_eq!(vector.back().unwrap_err(), ByteVecError::EmptyVector);
    assert_eq!(vector.pop_back().unwrap_err(), ByteVecError::EmptyVector);
    assert_eq!(vector.pop_front().unwrap_err(), ByteVecError::EmptyVector);
    assert_eq!(
        vector.at(0).unwrap_err(),
        ByteVecError::IndexOutOfBounds {
            index: 0,
            length: 0
        }
    );
    assert_eq!(
        vector.insert_at(1, 1).unwrap_err(),
        ByteVecError::IndexOutOfBounds {
            index: 1,
            length: 0
        }
    );
}

#[test]
fn test_typed_byte_vec_round_trip() {
    let mut raw = ByteVec::new(4).unwrap();
    raw.push_back(&7u32.to_ne_bytes()).unwrap();

    let typed = TypedVec::<u32>::from_byte_vec(raw).unwrap();
    assert_eq!(typed.to_vec(), [7]);

    let raw = typed.into_byte_vec();
    assert_eq!(raw.as_bytes(), &7u32.to_ne_bytes());
}

#[test]
fn test_value_container_contract() {
    fn describe(container: &dyn ValueContainer) -> (usize, usize, bool) {
        (
            container.element_width(),
            container.len(),
            container.is_empty(),
        )
    }

    let raw = ByteVec::new(3).unwrap();
    assert_eq!(describe(&raw), (3, 0, true));

    let typed = vals();
    assert_eq!(describe(&typed), (4, 6, false));
}
