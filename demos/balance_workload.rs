//! Balance 100 synthetic work items across nine workers.
//!
//! Run with `RUST_LOG=u_assign=debug` for per-generation detail.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use u_assign::ga::{AssignmentProblem, GaConfig, Optimizer};
use u_assign::kpi::AssignmentKpi;
use u_assign::sample;
use u_assign::AssignResult;

fn main() -> AssignResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = SmallRng::seed_from_u64(2024);
    let workers = sample::reference_workers();
    let items = sample::random_work_items(100, &mut rng);
    let problem = AssignmentProblem::new(workers, items)?;

    let optimizer = Optimizer::new(problem, GaConfig::default().with_seed(2024))?;
    let config = optimizer.config();
    println!(
        "Running {} generations, population {}, mutation {}, crossover {}\n",
        config.generations, config.population_size, config.mutation_rate, config.crossover_rate
    );
    let result = optimizer.run_with_observer(|report| {
        println!(
            "Generation {:>3}: best fitness = {:.4}",
            report.generation, report.best_fitness
        );
    })?;

    println!("\nRun time: {:.4} s", result.elapsed.as_secs_f64());

    let Some(best) = result.best_solution else {
        println!("No generations were run.");
        return Ok(());
    };
    let kpi = AssignmentKpi::calculate(optimizer.problem(), &best)?;
    println!(
        "Best fitness {:.2} | spread {:.2} | overload {:.2} | coverage {:.0}%",
        result.best_fitness,
        kpi.spread,
        kpi.total_overload,
        kpi.coverage() * 100.0
    );

    for worker in optimizer.problem().workers() {
        let load = &kpi.by_worker[&worker.id];
        println!(
            "\nWorker {} (seniority {}): {} items, load {:.2} / {:.2}",
            worker.id, worker.seniority, load.item_count, load.load, worker.capacity
        );
        for &item_id in best.items_of(worker.id) {
            let item = optimizer.problem().work_item(item_id)?;
            println!(
                "  - item {:>3}: category {}, urgency {}, weight {:.2}",
                item.id, item.category, item.urgency, item.weight
            );
        }
    }

    Ok(())
}
