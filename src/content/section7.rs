use crate::core::model::{Challenge, Exercise, Lesson, Section, SubSection};

pub static REACT_TYPESCRIPT: Section = Section {
    title: "React with TypeScript",
    description: "Typed components, state, effects and custom hooks.",
    lessons: &[
        Lesson {
            title: "Components and Props",
            description: "Building UI from typed function components.",
            sections: &[
                SubSection {
                    title: "Typing props",
                    explanation: "<p>Describe a component's props with an interface and destructure them in the parameter list. Optional props get defaults right there.</p>",
                    code_example: Some(
                        r#"interface ButtonProps {
  label: string;
  variant?: "primary" | "secondary";
  onClick: () => void;
}

export function Button({ label, variant = "primary", onClick }: ButtonProps) {
  return (
    <button className={`btn btn-${variant}`} onClick={onClick}>
      {label}
    </button>
  );
}"#,
                    ),
                },
                SubSection {
                    title: "Children and composition",
                    explanation: "<p>Accept nested content with a <code>children: React.ReactNode</code> prop. Composition through children is usually simpler than configuration through many props.</p>",
                    code_example: Some(
                        r#"function Card({ title, children }: { title: string; children: React.ReactNode }) {
  return (
    <section className="card">
      <h2>{title}</h2>
      {children}
    </section>
  );
}"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Build a typed Alert component with info, warning and error variants and an optional dismiss callback.",
            }),
        },
        Lesson {
            title: "State and Events",
            description: "Making components interactive with useState.",
            sections: &[
                SubSection {
                    title: "useState",
                    explanation: "<p><code>useState</code> infers its type from the initial value. Pass a type argument when the initial value does not describe every possible state, such as <code>null</code> before data loads.</p>",
                    code_example: Some(
                        r#"const [count, setCount] = useState(0);
const [user, setUser] = useState<User | null>(null);

setCount((c) => c + 1);"#,
                    ),
                },
                SubSection {
                    title: "Event handlers",
                    explanation: "<p>React passes typed synthetic events. <code>React.ChangeEvent&lt;HTMLInputElement&gt;</code> gives access to <code>event.target.value</code> as a string.</p>",
                    code_example: Some(
                        r#"function NameInput() {
  const [name, setName] = useState("");
  const onChange = (e: React.ChangeEvent<HTMLInputElement>) => setName(e.target.value);
  return <input value={name} onChange={onChange} />;
}"#,
                    ),
                },
            ],
            code_example: None,
            exercise: None,
        },
        Lesson {
            title: "Effects and Custom Hooks",
            description: "Synchronising with the outside world and sharing stateful logic.",
            sections: &[
                SubSection {
                    title: "useEffect",
                    explanation: "<p>Effects run after render. List every value the effect reads in the dependency array, and return a cleanup function to cancel subscriptions or in-flight requests.</p>",
                    code_example: Some(
                        r#"useEffect(() => {
  const controller = new AbortController();
  fetch(`/api/todos/${id}`, { signal: controller.signal })
    .then((r) => r.json())
    .then(setTodo);
  return () => controller.abort();
}, [id]);"#,
                    ),
                },
                SubSection {
                    title: "Custom hooks",
                    explanation: "<p>A custom hook is a function whose name starts with <code>use</code> and that calls other hooks. It packages stateful logic so several components can reuse it.</p>",
                    code_example: Some(
                        r#"function useFetch<T>(url: string) {
  const [data, setData] = useState<T | null>(null);
  const [error, setError] = useState<Error | null>(null);

  useEffect(() => {
    const controller = new AbortController();
    fetch(url, { signal: controller.signal })
      .then((r) => r.json() as Promise<T>)
      .then(setData)
      .catch((e) => {
        if (e.name !== "AbortError") setError(e);
      });
    return () => controller.abort();
  }, [url]);

  return { data, error, loading: data === null && error === null };
}"#,
                    ),
                },
            ],
            code_example: None,
            exercise: Some(Exercise {
                instructions: "Write a useLocalStorage<T>(key, initial) hook that keeps state in sync with localStorage.",
            }),
        },
    ],
    challenge: Some(Challenge {
        description: "Build a typed todo list application in React.",
        requirements: &[
            "Todos can be added, toggled and deleted",
            "A filter shows all, active or completed todos",
            "State lives in a useReducer with a discriminated union of actions",
            "Todos persist across reloads through a custom hook",
        ],
        starter_code: r#"type Todo = { id: string; title: string; done: boolean };

type Action =
  | { type: "add"; title: string }
  // TODO: toggle and delete
  ;

function reducer(state: Todo[], action: Action): Todo[] {
  // TODO
  return state;
}"#,
    }),
};
