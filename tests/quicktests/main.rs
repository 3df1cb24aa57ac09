//! Property tests over the public API of both tree flavours.

mod op;

pub(crate) use op::Op;

macro_rules! properties {
    ($flavour:ident) => {
        mod $flavour {
            use std::collections::HashSet;

            use ordered_tree::$flavour::Tree;
            use quickcheck_macros::quickcheck;

            use crate::Op;

            fn tree_of(xs: &[i8]) -> Tree<i8> {
                let mut tree = Tree::new();
                for x in xs {
                    tree.insert(*x);
                }
                tree
            }

            #[quickcheck]
            fn contains(xs: Vec<i8>) -> bool {
                let tree = tree_of(&xs);
                xs.iter().all(|x| tree.find(x))
            }

            #[quickcheck]
            fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
                let tree = tree_of(&xs);
                let added: HashSet<_> = xs.into_iter().collect();
                let nots: HashSet<_> = nots.into_iter().collect();
                let mut nots = nots.difference(&added);

                nots.all(|x| !tree.find(x))
            }

            #[quickcheck]
            fn delete_then_find(xs: HashSet<i8>) -> bool {
                let xs: Vec<_> = xs.into_iter().collect();
                let mut tree = tree_of(&xs);

                xs.iter().all(|x| tree.delete(x) && !tree.find(x)) && tree.is_empty()
            }

            #[quickcheck]
            fn delete_missing_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
                if xs.contains(&missing) {
                    return true;
                }
                let mut tree = tree_of(&xs);
                let before = tree.sideways().to_string();

                !tree.delete(&missing) && tree.sideways().to_string() == before && tree.len() == xs.len()
            }

            #[quickcheck]
            fn delete_twice_reports_true_then_false(xs: HashSet<i8>) -> bool {
                let xs: Vec<_> = xs.into_iter().collect();

                xs.iter().all(|x| {
                    let mut tree = tree_of(&xs);
                    tree.delete(x) && !tree.delete(x)
                })
            }

            #[quickcheck]
            fn count_conservation(ops: Vec<Op<i8>>) -> bool {
                let mut tree = Tree::new();
                let mut inserted = 0;
                let mut deleted = 0;

                for op in &ops {
                    match op {
                        Op::Insert(x) => {
                            tree.insert(*x);
                            inserted += 1;
                        }
                        Op::Delete(x) => {
                            if tree.delete(x) {
                                deleted += 1;
                            }
                        }
                    }
                }

                tree.len() == inserted - deleted
                    && tree.sideways().to_string().lines().count() == tree.len().max(1)
            }

            #[quickcheck]
            fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
                let mut tree = tree_of(&xs);
                let mut still_present = xs;
                for delete in &deletes {
                    // Only one occurrence goes per delete, in the tree and in the model alike.
                    let expected = match still_present.iter().position(|x| x == delete) {
                        Some(pos) => {
                            still_present.swap_remove(pos);
                            true
                        }
                        None => false,
                    };
                    if tree.delete(delete) != expected {
                        return false;
                    }
                }

                still_present.iter().all(|x| tree.find(x)) && tree.len() == still_present.len()
            }
        }
    };
}

properties!(recursive);
properties!(iterative);
