use plinth_derive::align_to;

#[align_to(64)]
struct CacheLine {
    counter: u64,
}

#[align_to(16)]
enum Slot {
    Empty,
    Full(u32),
}

#[align_to(32)]
struct Wrapper<T> {
    inner: T,
}

fn main() {
    assert_eq!(std::mem::align_of::<CacheLine>(), 64);
    assert_eq!(std::mem::align_of::<Slot>(), 16);
    assert_eq!(std::mem::align_of::<Wrapper<u8>>(), 32);

    let line = CacheLine { counter: 7 };
    assert_eq!(std::ptr::addr_of!(line) as usize % 64, 0);
    assert_eq!(line.counter, 7);

    let slot = Slot::Full(3);
    assert!(matches!(slot, Slot::Full(3)));
    assert!(!matches!(Slot::Empty, Slot::Full(_)));

    let wrapped = Wrapper { inner: 1u8 };
    assert_eq!(wrapped.inner, 1);
}
