//! 度数序列
//!
//! Havel–Hakimi 判定：一个非负整数序列能否是某个简单图的度数序列

/// `sequence` 是否可图（存在以它为度数序列的简单图）
pub fn is_graphic(sequence: &[usize]) -> bool {
    if sequence.iter().sum::<usize>() % 2 != 0 {
        return false;
    }

    let mut remaining: Vec<usize> = sequence.to_vec();
    loop {
        remaining.retain(|&d| d > 0);
        if remaining.is_empty() {
            return true;
        }

        remaining.sort_unstable_by(|a, b| b.cmp(a));
        let d = remaining.remove(0);
        if d > remaining.len() {
            return false;
        }
        for degree in remaining.iter_mut().take(d) {
            *degree -= 1;
        }
    }
}
