

mod normalize;
