// Reference model for Rbt, a counting multiset over keys in 0..capacity.
struct RefKeys {
    counts: Vec<usize>,
}

impl RefKeys {
    fn new(capacity: usize) -> RefKeys {
        RefKeys {
            counts: vec![0; capacity],
        }
    }

    fn len(&self) -> usize {
        self.counts.iter().sum()
    }

    fn contains(&self, key: i64) -> bool {
        self.counts[key as usize] > 0
    }

    fn insert(&mut self, key: i64) {
        self.counts[key as usize] += 1;
    }

    fn remove(&mut self, key: i64) -> Option<i64> {
        let count = &mut self.counts[key as usize];
        if *count == 0 {
            None
        } else {
            *count -= 1;
            Some(key)
        }
    }

    fn iter(&self) -> std::vec::IntoIter<i64> {
        self.counts
            .iter()
            .enumerate()
            .flat_map(|(key, count)| std::iter::repeat(key as i64).take(*count))
            .collect::<Vec<i64>>()
            .into_iter()
    }
}

// (key, black) pairs in pre-order, captures shape and colors.
fn shape(node: Option<&Node<i64>>, acc: &mut Vec<(i64, bool)>) {
    if let Some(node) = node {
        acc.push((*node.key(), node.is_black()));
        shape(node.left(), acc);
        shape(node.right(), acc);
    }
}

fn height_bound(n: usize) -> f64 {
    2_f64 * ((n + 1) as f64).log2()
}
