use chart_layout::core::{ChartArea, LabelPositions, ValueAxis, compute_bar_layout};
use chart_layout::model::ChartSet;
use chart_layout::render::Color;
use chart_layout::style::BarChartStyle;
use proptest::prelude::*;

proptest! {
    #[test]
    fn bar_groups_are_centred_and_regions_match_bars(
        set_count in 1usize..6,
        entry_count in 2usize..12,
        slot in 40.0f64..200.0,
        bar_spacing in 0.0f64..10.0,
        set_spacing in 0.0f64..4.0,
        values in proptest::collection::vec(0.0f64..100.0, 72)
    ) {
        let area = ChartArea::new(0.0, 0.0, slot * (entry_count as f64 + 1.0), 500.0).expect("area");
        let axis = ValueAxis::new(0.0, 100.0, area).expect("axis");
        let labels = LabelPositions::new(
            (0..entry_count).map(|i| slot * (i as f64 + 1.0)).collect(),
        ).expect("labels");
        let style = BarChartStyle::default()
            .with_bar_spacing(bar_spacing)
            .with_set_spacing(set_spacing);

        let sets: Vec<ChartSet> = (0..set_count)
            .map(|j| {
                let mut set = ChartSet::bar().with_color(Color::BLACK);
                for i in 0..entry_count {
                    set.add_point(format!("{i}"), values[j * 12 + i]).expect("point");
                }
                set
            })
            .collect();

        let layout = compute_bar_layout(&sets, &labels, axis, &style).expect("layout");
        let width = layout.metrics.bar_width;
        prop_assert!(width > 0.0);

        for i in 0..entry_count {
            let tick = labels.get(i).expect("tick");
            let left = layout.bars[0][i].left;
            let right = layout.bars[set_count - 1][i].right;
            prop_assert!(((left + right) / 2.0 - tick).abs() <= 1e-6);
            prop_assert!(
                (right - left - (width * set_count as f64 + set_spacing * (set_count - 1) as f64)).abs()
                    <= 1e-6
            );
            for j in 1..set_count {
                prop_assert!(layout.bars[j - 1][i].right <= layout.bars[j][i].left + 1e-9);
            }
        }

        for j in 0..set_count {
            for i in 0..entry_count {
                let bar = layout.bars[j][i];
                let region = layout.regions.get(j, i).expect("region");
                prop_assert_eq!(bar.left, region.left);
                prop_assert_eq!(bar.top, region.top);
                prop_assert_eq!(bar.right, region.right);
                prop_assert_eq!(bar.bottom, region.bottom);
            }
        }

        let again = compute_bar_layout(&sets, &labels, axis, &style).expect("layout");
        prop_assert_eq!(layout, again);
    }
}
