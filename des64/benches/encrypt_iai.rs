use des64::{Block, Subkeys};
use iai::black_box;

fn iai_subkeys() -> Subkeys {
    des64::generate_subkeys(black_box(Block::from(0x133457799BBCDFF1)))
}

fn iai_encrypt_block() -> Block {
    des64::encrypt_block(
        black_box(Block::from(0x0123456789ABCDEF)),
        black_box(Block::from(0x133457799BBCDFF1)),
    )
}

iai::main!(iai_subkeys, iai_encrypt_block);
