use std::cmp::Ordering;

use avl_keys::{NonUniqueAvlTree, Order, TreeBuilder, UniqueAvlTree};

fn main() {
    let mut map: UniqueAvlTree<(i32, &str), _> =
        TreeBuilder::new()
            .comparator(|a: &(i32, &str), b: &(i32, &str)| a.0.cmp(&b.0))
            .build_unique()
            .expect("comparator is set");
    map.insert((0, "zero"))
        .insert((1, "one"))
        .insert((2, "two"))
        .insert((2, "two"))
        .insert((3, "three"));
    assert_eq!(map.get(&(1, "")), Some(&(1, "one")));
    map.remove_key(&(1, ""));
    assert!(map.get(&(1, "")).is_none());

    map.traverse(Order::In, |(k, v)| println!("{k} => {v}"));

    let mut multiset = NonUniqueAvlTree::with_natural_order();
    for x in [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5] {
        multiset.insert(x);
    }
    assert_eq!(multiset.get(&5).map(|list| list.len()), Some(3));

    // Guided search: steer by the key, no full comparator needed
    let found = multiset.find(|key| match key {
        9 => Ordering::Equal,
        k if 9 < *k => Ordering::Less,
        _ => Ordering::Greater,
    });
    assert_eq!(found.and_then(|list| list.head()), Some(&9));

    print!("{{ ");
    multiset.traverse(Order::In, |x| print!("{x}, "));
    println!("}}");
}
