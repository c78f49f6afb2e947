use super::Zip as ZipTrait;

impl<I, const N: usize> ZipTrait for [I; N]
where
    I: IntoIterator,
{
    type Row = [Option<I::Item>; N];

    fn zip(self) -> Vec<Self::Row> {
        // Fused so a column that has ended cannot yield again in later rows.
        let mut columns = self.map(|column| column.into_iter().fuse());
        let mut rows = Vec::new();
        loop {
            let row: [Option<I::Item>; N] = core::array::from_fn(|index| columns[index].next());
            if row.iter().all(Option::is_none) {
                break rows;
            }
            rows.push(row);
        }
    }
}
