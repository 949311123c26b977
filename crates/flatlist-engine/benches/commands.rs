use criterion::{Criterion, criterion_group, criterion_main};
use flatlist_engine::list::{expand_to_complete_items, nested_blocks_of};
use flatlist_engine::{
    Block, BlockPos, IndentDirection, ListCommands, ListItemId, ListType, MemoryStore,
};

/// `items` top-level items, each with a continuation block and a three-level subtree
fn generate_outline(items: usize) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(items * 5);
    for n in 0..items {
        let id = ListItemId::random();
        blocks.push(Block::list_item(format!("item {n}"), id, 0, ListType::Unordered));
        blocks.push(Block::list_item(format!("item {n} cont"), id, 0, ListType::Unordered));
        for depth in 1..=3 {
            blocks.push(Block::list_item(
                format!("item {n}.{depth}"),
                ListItemId::random(),
                depth,
                ListType::Unordered,
            ));
        }
    }
    blocks
}

fn bench_command_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("commands");
    group.sample_size(10);

    let blocks = generate_outline(2_000);
    let middle = BlockPos(blocks.len() / 2);

    group.bench_function("indent_middle_item", |b| {
        let mut store = MemoryStore::new(blocks.clone());
        store.select(middle);
        let mut commands = ListCommands::new();
        b.iter(|| {
            let indented = commands.execute(IndentDirection::Forward, &mut store);
            let outdented = commands.execute(IndentDirection::Backward, &mut store);
            std::hint::black_box((indented, outdented));
        });
    });

    group.bench_function("outdent_whole_document", |b| {
        b.iter(|| {
            let mut store = MemoryStore::new(blocks.clone());
            store.select_range(BlockPos(0), BlockPos(blocks.len() - 1));
            let mut commands = ListCommands::new();
            std::hint::black_box(commands.execute(IndentDirection::Backward, &mut store));
        });
    });

    group.bench_function("expand_and_walk_nested", |b| {
        let store = MemoryStore::new(blocks.clone());
        b.iter(|| {
            let mut selection = vec![BlockPos(1), middle];
            expand_to_complete_items(&store, &mut selection);
            let nested = nested_blocks_of(&store, *selection.last().unwrap()).count();
            std::hint::black_box((selection, nested));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_command_operations);
criterion_main!(benches);
