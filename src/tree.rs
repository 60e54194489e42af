use crate::error::InsertError;
use crate::node::*;
use crate::result::*;
use crate::utils::*;

/// A [radix tree](https://en.wikipedia.org/wiki/Radix_tree) mapping
/// URL-style path patterns to payloads of type `T`.
///
/// The tree is built once, up front, through repeated [`Tree::add`] calls;
/// afterwards any number of concurrent readers may call [`Tree::find`]
/// without synchronization, since lookup never mutates a node.
pub struct Tree<T> {
    root: Node<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self {
            root: Node::<T>::new("", None, true),
        }
    }

    /// Inserts `pattern` into the tree, carrying `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::Duplicate`] if `pattern` is already an
    /// endpoint, or [`InsertError::SharedKey`] if `pattern` would place a
    /// named parameter with a different name at a branching position
    /// already occupied by a differently-named parameter. On either error
    /// the tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_router::Tree;
    ///
    /// let mut tree = Tree::<&str>::new();
    /// tree.add("/abc", "root").unwrap();
    /// ```
    pub fn add(&mut self, pattern: impl Into<String>, payload: T) -> Result<(), InsertError> {
        let pattern = pattern.into();
        if self.root.placeholder {
            self.root = Node::<T>::new(&pattern, Some(payload), false);
            return Ok(());
        }
        Tree::<T>::add_internal(&pattern, Some(payload), &mut self.root, &pattern)
    }

    fn add_internal(
        path: &str,
        payload: Option<T>,
        node: &mut Node<T>,
        pattern: &str,
    ) -> Result<(), InsertError> {
        let mut rest_path_peekable = path.chars().peekable();
        let mut rest_key_peekable = node.key.chars().peekable();
        let mut pos = 0;

        loop {
            let p = rest_path_peekable.peek();
            let k = rest_key_peekable.peek();
            if p.is_none() || k.is_none() || p != k {
                break;
            }
            rest_path_peekable.next();
            rest_key_peekable.next();
            pos += 1;
        }

        let rest_path = rest_path_peekable.collect::<String>();
        let key_size = node.key.chars().count();
        let path_size = path.chars().count();

        if pos == 0 || (key_size <= pos && pos < path_size) {
            let new_key = rest_path.as_str();

            let mut matched_child = None;
            for (i, child) in node.children.iter().enumerate() {
                if same_first_char(new_key, &child.key)? {
                    matched_child = Some(i);
                    break;
                }
            }

            match matched_child {
                Some(i) => {
                    Tree::<T>::add_internal(new_key, payload, &mut node.children[i], pattern)?
                }
                None => node.children.push(Node::<T>::new(new_key, payload, false)),
            }
            node.sort_children();
        } else if key_size == pos && pos == path_size {
            if node.payload.is_some() {
                return Err(InsertError::Duplicate(pattern.to_string()));
            }
            node.payload = payload;
        } else if 0 < pos && pos < key_size {
            let rest_key = rest_key_peekable.collect::<String>();
            let new_key = rest_key.as_str();
            let mut new_node: Node<T> = Node::<T>::new(new_key, None, false);
            new_node.payload = std::mem::replace(&mut node.payload, None);
            new_node.children = std::mem::replace(&mut node.children, vec![]);
            node.set_key(prefix(path, pos));
            node.children.push(new_node);
            if pos < path_size {
                node.children
                    .push(Node::<T>::new(rest_path.as_str(), payload, false));
            } else {
                node.payload = payload;
            }
            node.sort_children();
        }

        Ok(())
    }

    /// Walks the tree looking up `path`, returning a [`LookupResult`].
    ///
    /// Always succeeds — a non-match is represented by
    /// [`LookupResult::found`] returning `false`, not by an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_router::Tree;
    ///
    /// let mut tree = Tree::<&str>::new();
    /// tree.add("/about", "about").unwrap();
    /// let result = tree.find("/about");
    /// assert!(result.found());
    /// ```
    pub fn find<'a>(&'a self, path: impl Into<String>) -> LookupResult<'a, T> {
        let result = LookupResult::<'a, T>::new();
        Tree::<T>::find_internal(&path.into(), result, &self.root, true)
    }

    fn find_internal<'a>(
        path: &str,
        mut result: LookupResult<'a, T>,
        node: &'a Node<T>,
        first: bool,
    ) -> LookupResult<'a, T> {
        let key_size = node.key.chars().count();
        let path_size = path.chars().count();
        if first && path_size == key_size && path == node.key && node.payload.is_some() {
            return result.record(node, true);
        }

        let mut path_pos = 0;
        let mut key_pos = 0;
        loop {
            let path_current = path.chars().nth(path_pos);
            let key_current = node.key.chars().nth(key_pos);
            if path_current.is_none() || key_current.is_none() {
                break;
            }
            if key_current != Some('*') && key_current != Some(':') && path_current != key_current
            {
                break;
            }
            if let Some(k) = key_current {
                if k == '*' {
                    let name = suffix(&node.key, key_pos + 1);
                    let value = suffix(path, path_pos);
                    result.params.insert(name, value);
                    return result.record(node, true);
                } else if k == ':' {
                    let key_param_size = detect_param_size(&node.key, key_pos);
                    let path_param_size = detect_param_size(path, path_pos);
                    let name = substring(&node.key, key_pos + 1, key_param_size);
                    let value = substring(path, path_pos, path_param_size);
                    result.params.insert(name, value);
                    path_pos = path_param_size;
                    key_pos = key_param_size;
                    continue;
                }
            }
            path_pos += 1;
            key_pos += 1;
        }

        let path_next = path.chars().nth(path_pos);
        let key_next = node.key.chars().nth(key_pos);

        if path_next.is_none() && key_next.is_none() && node.payload.is_some() {
            return result.record(node, true);
        }

        if path_next.is_some() {
            if 0 < key_size && has_trailing_slash(path_pos, path_size, path) {
                return result.record(node, true);
            }

            let new_path = suffix(path, path_pos);
            if let Some(child) = node
                .children
                .iter()
                .find(|&child| child.is_named_or_catch_all() || shared_key(&new_path, &child.key))
            {
                result = result.record(node, false);
                return Tree::<T>::find_internal(&new_path, result, child, false);
            }
            return result;
        }

        if key_next.is_some() {
            if has_trailing_slash(key_pos, key_size, &node.key) {
                return result.record(node, true);
            }

            if node.has_catch_all(key_pos, key_size) {
                if key_next != Some('*') {
                    key_pos += 1;
                }
                let name = suffix(&node.key, key_pos + 1);
                result.params.insert(name, String::new());
                return result.record(node, true);
            }
        }

        result
    }
}
