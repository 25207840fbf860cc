use plinth_derive::align_to;

#[align_to(0)]
struct Unaligned {
    value: u8,
}

fn main() {}
