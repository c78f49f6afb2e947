use super::Zip as ZipTrait;

macro_rules! impl_zip_tuple {
    ($($F:ident=$idx:tt)+) => {
        impl<$($F),+> ZipTrait for ($($F,)+)
        where $(
            $F: IntoIterator,
        )+ {
            type Row = ($(Option<$F::Item>,)+);

            fn zip(self) -> Vec<Self::Row> {
                let ($($F,)+) = self;
                // Fused so a column that has ended cannot yield again in later rows.
                $(let mut $F = $F.into_iter().fuse();)+
                let mut rows = Vec::new();
                loop {
                    let row = ($($F.next(),)+);
                    if true $(&& row.$idx.is_none())+ {
                        break rows;
                    }
                    rows.push(row);
                }
            }
        }
    };
}

impl_zip_tuple! { A=0 }
impl_zip_tuple! { A=0 B=1 }
impl_zip_tuple! { A=0 B=1 C=2 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 K=10 }
impl_zip_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 K=10 L=11 }
