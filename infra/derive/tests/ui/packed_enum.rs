use plinth_derive::packed;

#[packed]
enum Tag {
    A,
    B,
}

fn main() {}
