//! Rating engine tests
//!
//! The star band is a contract: same inputs must always map to the same
//! band, because the frontend renders it directly.

use scraptrade::services::rating;

// =============================================================================
// 边界行为
// =============================================================================

#[test]
fn test_zero_views_always_one_star() {
    for clicks in [0, 1, 5, 100, 1_000_000] {
        assert_eq!(rating(0, clicks), 1, "rating(0, {clicks})");
    }
}

#[test]
fn test_output_always_in_one_to_five() {
    let samples = [0, 1, 2, 9, 10, 99, 100, 999, 1000, 9_999, 100_000];
    for &views in &samples {
        for &clicks in &samples {
            let stars = rating(views, clicks);
            assert!(
                (1..=5).contains(&stars),
                "rating({views}, {clicks}) out of band: {stars}"
            );
        }
    }
}

// =============================================================================
// 饱和与趋势
// =============================================================================

#[test]
fn test_full_click_through_trends_upward() {
    // 100% 点击率下，星级随浏览量单调不减
    let mut last = 0;
    for views in [1, 10, 100, 1000, 10_000, 100_000] {
        let stars = rating(views, views);
        assert!(stars >= last, "band dropped at views={views}");
        last = stars;
    }
    // log10(10001) > 4 ⇒ total > 4.5 ⇒ 封顶五星
    assert_eq!(rating(10_000, 10_000), 5);
}

#[test]
fn test_popularity_without_clicks_caps_at_three() {
    // engagement 为 0 时 total = log10(views+1)/2，最高 2.5
    assert_eq!(rating(1, 0), 1);
    assert_eq!(rating(999, 0), 2);
    assert_eq!(rating(99_999, 0), 3);
    assert_eq!(rating(10_000_000, 0), 3);
}

#[test]
fn test_clicks_monotonic_for_fixed_views() {
    for views in [1, 7, 50, 333, 1000] {
        let mut last = 0;
        for clicks in 0..=views {
            let stars = rating(views, clicks);
            assert!(
                stars >= last,
                "more clicks lowered the band at ({views}, {clicks})"
            );
            last = stars;
        }
    }
}

// =============================================================================
// 精确分档
// =============================================================================

#[test]
fn test_exact_banding() {
    // views=9 ⇒ base = log10(10) = 1.0 恰好
    assert_eq!(rating(9, 0), 1); // total 0.50
    assert_eq!(rating(9, 1), 1); // total ≈ 1.06
    assert_eq!(rating(9, 2), 2); // total ≈ 1.61
    assert_eq!(rating(9, 4), 3); // total ≈ 2.72
    assert_eq!(rating(9, 9), 3); // engagement 封顶 5 → total 3.0
}

#[test]
fn test_first_reveal_without_views() {
    // 新建挂单从未被浏览，第一次联系方式揭示后仍是一星
    assert_eq!(rating(0, 1), 1);
}
