// tests/property/scheduler.rs

use std::collections::BTreeSet;

use proptest::prelude::*;
use serde_json::Value;
use taskplan::errors::ScheduleError;
use taskplan::{Planner, ScheduleOptions};
use taskplan_test_utils::assert_topologically_valid;
use taskplan_test_utils::builders::TaskRecordBuilder;

const DUE_DATES: [Option<&str>; 4] = [None, Some("2025-01-01"), Some("2025-01-02"), Some("2026-07-15")];
const HOURS: [f64; 4] = [0.0, 0.5, 1.0, 8.0];

/// One generated task: dependency indices are always below the task's own
/// index, so the graph is acyclic.
#[derive(Debug, Clone)]
struct TaskSpec {
    deps: BTreeSet<usize>,
    due: usize,
    hours: usize,
}

fn title(i: usize) -> String {
    // Mixed case so locale and ordinal order disagree.
    if i % 2 == 0 {
        format!("task_{i}")
    } else {
        format!("Task_{i}")
    }
}

fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<TaskSpec>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        proptest::collection::vec(
            (
                proptest::collection::vec(any::<usize>(), 0..4),
                0..DUE_DATES.len(),
                0..HOURS.len(),
            ),
            num_tasks,
        )
        .prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (potential, due, hours))| TaskSpec {
                    deps: if i == 0 {
                        BTreeSet::new()
                    } else {
                        potential.into_iter().map(|d| d % i).collect()
                    },
                    due,
                    hours,
                })
                .collect()
        })
    })
}

fn records(specs: &[TaskSpec]) -> Vec<Value> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let mut task = TaskRecordBuilder::new(&title(i)).hours(HOURS[spec.hours]);
            if let Some(date) = DUE_DATES[spec.due] {
                task = task.due(date);
            }
            for dep in spec.deps.iter() {
                task = task.after(&title(*dep));
            }
            task.build()
        })
        .collect()
}

proptest! {
    #[test]
    fn acyclic_inputs_yield_complete_valid_orders(specs in dag_strategy(12)) {
        let records = records(&specs);
        let schedule = Planner::default().plan(&records).unwrap();

        prop_assert_eq!(schedule.len(), records.len());
        let unique: BTreeSet<&String> = schedule.recommended_order.iter().collect();
        prop_assert_eq!(unique.len(), records.len());
        assert_topologically_valid(&records, &schedule.recommended_order);
    }

    #[test]
    fn order_does_not_depend_on_record_order(
        (specs, shuffled) in dag_strategy(10).prop_flat_map(|specs| {
            let n = specs.len();
            (Just(specs), Just((0..n).collect::<Vec<_>>()).prop_shuffle())
        })
    ) {
        let original = records(&specs);
        let permuted: Vec<Value> = shuffled.iter().map(|&i| original[i].clone()).collect();

        let planner = Planner::default();
        let a = planner.plan(&original).unwrap();
        let b = planner.plan(&permuted).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(planner.plan(&original).unwrap(), a);
    }

    #[test]
    fn injected_back_edge_is_always_a_cycle(
        specs in dag_strategy(10).prop_filter("need two tasks", |s| s.len() >= 2),
        pick in any::<(usize, usize)>(),
    ) {
        let n = specs.len();
        let low = pick.0 % (n - 1);
        let high = low + 1 + pick.1 % (n - 1 - low);

        let mut specs = specs;
        // high -> low and low -> high: a two-task loop.
        specs[high].deps.insert(low);
        let mut records = records(&specs);
        if let Some(Value::Object(fields)) = records.get_mut(low) {
            let deps = fields
                .entry("dependencies")
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(items) = deps {
                items.push(Value::String(title(high)));
            }
        }

        let planner = Planner::new(ScheduleOptions { cycle_witness: true, ..ScheduleOptions::default() });
        match planner.plan(&records) {
            Err(ScheduleError::Cycle { blocked, witness }) => {
                prop_assert!(blocked.contains(&title(low)));
                prop_assert!(blocked.contains(&title(high)));
                let witness = witness.expect("a witness is always found for a real loop");
                prop_assert!(witness.len() >= 2);
                prop_assert_eq!(witness.first(), witness.last());
                for step in witness.iter() {
                    prop_assert!(blocked.contains(step));
                }
            }
            other => prop_assert!(false, "expected a cycle, got {:?}", other),
        }
    }
}
