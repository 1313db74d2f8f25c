use fortarray_core::{
    Allocatable, Dimension, Shape, Tensor, B1, B2, B3, B4, B5, B6, E1, E2, E3, E4, E5, E6,
};

macro_rules! generate_dim_test {
    (($($N:expr),*), $name:ident, $rank:ident) => {
        #[test]
        fn $name() {
            let size = 1 $(* $N)*;
            let c = Tensor::<u8, $rank<$($N, )*>>::zeros();
            let f = Dimension::<u8, $rank<$($N, )*>>::zeros();
            assert_eq!(c.size(), size);
            assert_eq!(f.size(), size);
            assert_eq!(<$rank<$($N, )*> as Shape>::SIZE, size);
            assert_eq!(c.extent(0), [$($N, )*][0] as i64);
            assert_eq!(c.lbound(0), 0);
            assert_eq!(f.lbound(0), 1);
        }
    };
}

generate_dim_test!((1), dim1, E1);
generate_dim_test!((1, 2), dim2, E2);
generate_dim_test!((1, 2, 3), dim3, E3);
generate_dim_test!((1, 2, 3, 4), dim4, E4);
generate_dim_test!((1, 2, 3, 4, 5), dim5, E5);
generate_dim_test!((1, 2, 3, 4, 5, 6), dim6, E6);

macro_rules! generate_alloc_test {
    (($($N:expr),*), $name:ident, $bounds:ty) => {
        #[test]
        fn $name() {
            let mut a = Allocatable::<u8, $bounds>::new();
            a.allocate([$($N, )*]);
            assert_eq!(a.size(), 1 $(* $N)*);
            assert_eq!(a.extents(), [$($N, )*]);
            a.deallocate();
            assert_eq!(a.size(), 0);
        }
    };
}

generate_alloc_test!((2), alloc1, B1<1>);
generate_alloc_test!((2, 3), alloc2, B2<1, 1>);
generate_alloc_test!((2, 3, 4), alloc3, B3<1, 1, 1>);
generate_alloc_test!((2, 3, 4, 5), alloc4, B4<1, 1, 1, 1>);
generate_alloc_test!((2, 3, 4, 5, 6), alloc5, B5<1, 1, 1, 1, 1>);
generate_alloc_test!((2, 3, 4, 5, 6, 7), alloc6, B6<1, 1, 1, 1, 1, 1>);

#[test]
fn rank6_views() {
    let mut a = Allocatable::<u32, B6<0, 0, 0, 0, 0, 0>>::new();
    a.reserve([2, 2, 2, 2, 2, 3]);
    for (i, x) in a.data_mut().iter_mut().enumerate() {
        *x = i as u32;
    }
    assert_eq!(a.at(1).at(1).at(1).at(1).at(1)[2], 95);
    assert_eq!(*a.at_sequential([1, 1, 1, 1, 1, 2]), 95);
    assert_eq!(*a.at_bound([2, 1, 1, 1, 1, 1]), 95);
}
