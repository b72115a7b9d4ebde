// HashChain and ChainView behaviour seen from outside the crate.

use lzmatch::matcher::{ChainView, HashChain, Pos, HASH_BITS_DEFAULT, NIL};

#[test]
fn chain_lists_positions_newest_first() {
    let data = b"xyz1xyz2xyz3xyz";
    let mut chain = HashChain::new(9, HASH_BITS_DEFAULT);
    let mut heads = Vec::new();
    for pos in 0..(data.len() - 2) as Pos {
        heads.push(chain.insert(data, pos));
    }
    // Walk from the last "xyz" at 12.
    let view = chain.view();
    let mut walked = vec![12];
    let mut cur = 12;
    while let Some(next) = view.next(cur) {
        if next == NIL {
            break;
        }
        walked.push(next);
        cur = next;
    }
    // 0 is the end marker, so the walk stops before it.
    assert_eq!(walked, vec![12, 8, 4]);
    assert_eq!(heads[12], 8);
    assert_eq!(heads[0], NIL);
}

#[test]
fn positions_fold_by_window_mask() {
    let mut chain = HashChain::new(9, 10);
    assert_eq!(chain.window_mask(), 511);
    assert_eq!(chain.prev_slice().len(), 512);
    let data = vec![b'q'; 1200];
    chain.insert(&data, 5);
    chain.insert(&data, 5 + 512);
    // The second insert reuses slot 5 and links back to the first.
    assert_eq!(chain.view().next(5), Some(5));
    assert_eq!(chain.view().next(5 + 512), Some(5));
}

#[test]
fn distinct_signatures_do_not_link() {
    let data = b"abcdefghi";
    let mut chain = HashChain::new(9, HASH_BITS_DEFAULT);
    assert_eq!(chain.insert(data, 0), NIL);
    assert_eq!(chain.insert(data, 3), NIL);
    assert_eq!(chain.insert(data, 6), NIL);
}

#[test]
fn view_over_caller_table() {
    let prev: Vec<Pos> = vec![0, 0, 1, 2];
    let view = ChainView::new(&prev, 3);
    assert_eq!(view.mask(), 3);
    assert_eq!(view.next(3), Some(2));
    assert_eq!(view.next(7), Some(2));
    assert_eq!(view.next(2), Some(1));
}
