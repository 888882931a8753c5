use ndarray::Array2;

/// Default embedding dimensionality.
pub const DEFAULT_DIM: usize = 8;

/// Produce the simulated embedding for one vocabulary id.
///
/// Each dimension is a shifted sine of the id, rounded to two decimals, so
/// every value lies in `[0, 1]` and the whole vector is a pure function of
/// `(id, dim)`. This stands in for a trained embedding table lookup.
pub fn embed_token(id: u32, dim: usize) -> Vec<f64> {
    (0..dim)
        .map(|d| {
            let raw = (f64::from(id) * 0.1 + d as f64 * 0.5).sin() * 0.5 + 0.5;
            (raw * 100.0).round() / 100.0
        })
        .collect()
}

/// Stack one embedding row per id into a `(tokens, dim)` matrix.
/// Zero ids yield a matrix with zero rows.
pub fn embed_all(ids: &[u32], dim: usize) -> Array2<f64> {
    let mut matrix = Array2::zeros((ids.len(), dim));
    for (r, &id) in ids.iter().enumerate() {
        for (c, value) in embed_token(id, dim).into_iter().enumerate() {
            matrix[[r, c]] = value;
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::{embed_all, embed_token, DEFAULT_DIM};

    #[test]
    fn id_zero_first_dim_is_exactly_half() {
        // sin(0) * 0.5 + 0.5 = 0.5
        assert_eq!(embed_token(0, 1), vec![0.5]);
    }

    #[test]
    fn length_matches_dim_and_values_stay_in_unit_range() {
        for id in [0, 1, 97, 1023] {
            let vector = embed_token(id, DEFAULT_DIM);
            assert_eq!(vector.len(), DEFAULT_DIM);
            for v in vector {
                assert!((0.0..=1.0).contains(&v), "value {v} out of range");
                // Rounded to two decimals.
                assert_eq!(v, (v * 100.0).round() / 100.0);
            }
        }
    }

    #[test]
    fn deterministic_for_same_id() {
        assert_eq!(embed_token(512, DEFAULT_DIM), embed_token(512, DEFAULT_DIM));
    }

    #[test]
    fn matrix_shape_follows_ids() {
        let matrix = embed_all(&[3, 14, 15], 8);
        assert_eq!(matrix.dim(), (3, 8));
        assert_eq!(matrix.row(1).to_vec(), embed_token(14, 8));

        let empty = embed_all(&[], 8);
        assert_eq!(empty.nrows(), 0);
    }
}
